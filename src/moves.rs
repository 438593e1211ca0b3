use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use crate::board::{Piece, PieceCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedMoveError {
    #[error("move '{0}' is shorter than four characters")]
    TooShort(String),
    #[error("'{0}' is not a square")]
    InvalidSquare(String),
}

/// A (row, col) grid coordinate. Row 0 is rank 8, col 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn from_chars(file: char, rank: char) -> Option<Self> {
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return None,
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => return None,
        };
        Some(Self { row, col })
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares in row-major order, starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl FromStr for Square {
    type Err = MalformedMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_chars(file, rank)
                .ok_or_else(|| MalformedMoveError::InvalidSquare(s.to_string())),
            _ => Err(MalformedMoveError::InvalidSquare(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// A single half-move: origin, destination and an optional promotion code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    start: Square,
    end: Square,
    promotion: PieceCode,
}

impl Move {
    /// `promotion` is a piece symbol such as `"Q"` or `"n"`; unknown or
    /// empty symbols mean no promotion.
    pub fn new(start: Square, end: Square, promotion: &str) -> Self {
        Self {
            start,
            end,
            promotion: PieceCode::from_symbol(promotion),
        }
    }

    /// Parses long algebraic notation such as `e2e4` or `e7e8q`.
    ///
    /// The promotion letter is read without regard to case and always
    /// yields the white code; the board picks the color from the side to
    /// move when the move is applied.
    pub fn parse_uci(uci: &str) -> Result<Self, MalformedMoveError> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() < 4 {
            return Err(MalformedMoveError::TooShort(uci.to_string()));
        }

        let square = |file: char, rank: char| {
            Square::from_chars(file, rank)
                .ok_or_else(|| MalformedMoveError::InvalidSquare(format!("{}{}", file, rank)))
        };
        let start = square(chars[0], chars[1])?;
        let end = square(chars[2], chars[3])?;

        let promotion = match chars.get(4).map(char::to_ascii_lowercase) {
            Some('n') => PieceCode::WHITE_KNIGHT,
            Some('b') => PieceCode::WHITE_BISHOP,
            Some('r') => PieceCode::WHITE_ROOK,
            Some('q') => PieceCode::WHITE_QUEEN,
            _ => PieceCode::EMPTY,
        };

        Ok(Self { start, end, promotion })
    }

    pub fn to_uci(&self) -> String {
        let mut result = format!("{}{}", self.start, self.end);
        if let Some((piece, _)) = self.promotion.decode() {
            match piece {
                Piece::Knight => result.push('n'),
                Piece::Bishop => result.push('b'),
                Piece::Rook => result.push('r'),
                Piece::Queen => result.push('q'),
                Piece::Pawn | Piece::King => {}
            }
        }
        result
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn end(&self) -> Square {
        self.end
    }

    pub fn promotion(&self) -> PieceCode {
        self.promotion
    }

    pub fn set_start(&mut self, start: Square) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Square) {
        self.end = end;
    }

    pub fn set_promotion(&mut self, promotion: PieceCode) {
        self.promotion = promotion;
    }
}

impl FromStr for Move {
    type Err = MalformedMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse_uci(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

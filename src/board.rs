use std::fmt;
use crate::moves::{MalformedMoveError, Move, Square};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Numeric piece code as stored on the grid.
///
/// `0` is an empty square, `1..=6` are white pawn through king and
/// `11..=16` are black pawn through king. Any other value is invalid and
/// behaves like an empty square when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCode(pub u8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);
    pub const WHITE_PAWN: PieceCode = PieceCode(1);
    pub const WHITE_KNIGHT: PieceCode = PieceCode(2);
    pub const WHITE_BISHOP: PieceCode = PieceCode(3);
    pub const WHITE_ROOK: PieceCode = PieceCode(4);
    pub const WHITE_QUEEN: PieceCode = PieceCode(5);
    pub const WHITE_KING: PieceCode = PieceCode(6);
    pub const BLACK_PAWN: PieceCode = PieceCode(11);
    pub const BLACK_KNIGHT: PieceCode = PieceCode(12);
    pub const BLACK_BISHOP: PieceCode = PieceCode(13);
    pub const BLACK_ROOK: PieceCode = PieceCode(14);
    pub const BLACK_QUEEN: PieceCode = PieceCode(15);
    pub const BLACK_KING: PieceCode = PieceCode(16);

    /// Offset between a white code and the black code of the same piece.
    pub const BLACK_OFFSET: u8 = 10;

    pub fn new(piece: Piece, color: Color) -> Self {
        let base = match piece {
            Piece::Pawn => 1,
            Piece::Knight => 2,
            Piece::Bishop => 3,
            Piece::Rook => 4,
            Piece::Queen => 5,
            Piece::King => 6,
        };
        match color {
            Color::White => PieceCode(base),
            Color::Black => PieceCode(base + Self::BLACK_OFFSET),
        }
    }

    /// Looks up a piece symbol: uppercase is white, lowercase is black.
    /// Anything else, including an empty string, maps to `EMPTY`.
    pub fn from_symbol(symbol: &str) -> Self {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Self::EMPTY,
        }
    }

    pub fn from_char(c: char) -> Self {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return Self::EMPTY,
        };
        Self::new(piece, color)
    }

    pub fn is_empty(&self) -> bool {
        self.decode().is_none()
    }

    /// Splits a valid, non-empty code into its piece and color.
    pub fn decode(&self) -> Option<(Piece, Color)> {
        let (base, color) = match self.0 {
            1..=6 => (self.0, Color::White),
            11..=16 => (self.0 - Self::BLACK_OFFSET, Color::Black),
            _ => return None,
        };
        let piece = match base {
            1 => Piece::Pawn,
            2 => Piece::Knight,
            3 => Piece::Bishop,
            4 => Piece::Rook,
            5 => Piece::Queen,
            _ => Piece::King,
        };
        Some((piece, color))
    }

    pub fn symbol(&self) -> char {
        match self.decode() {
            Some((piece, color)) => {
                let c = match piece {
                    Piece::Pawn => 'p',
                    Piece::Knight => 'n',
                    Piece::Bishop => 'b',
                    Piece::Rook => 'r',
                    Piece::Queen => 'q',
                    Piece::King => 'k',
                };
                match color {
                    Color::White => c.to_ascii_uppercase(),
                    Color::Black => c,
                }
            }
            None => ' ',
        }
    }
}

const RULE: &str = " +---+---+---+---+---+---+---+---+\n";
const SEPARATOR: &str = " | ";

const START_POSITION: [[u8; 8]; 8] = [
    [14, 12, 13, 15, 16, 13, 12, 14],
    [11, 11, 11, 11, 11, 11, 11, 11],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [4, 2, 3, 5, 6, 3, 2, 4],
];

/// An 8x8 grid of piece codes plus the side to move.
///
/// Row 0 is rank 8 and row 7 is rank 1. Moves are applied without any
/// legality or bounds checking.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    grid: [[PieceCode; 8]; 8],
    white_to_move: bool,
}

impl BoardState {
    pub fn new() -> Self {
        let mut grid = [[PieceCode::EMPTY; 8]; 8];
        for (row, codes) in START_POSITION.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                grid[row][col] = PieceCode(code);
            }
        }
        Self {
            grid,
            white_to_move: true,
        }
    }

    /// A grid with no pieces, white to move.
    pub fn empty() -> Self {
        Self {
            grid: [[PieceCode::EMPTY; 8]; 8],
            white_to_move: true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `true` when white is to move.
    pub fn side_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn set_side_to_move(&mut self, white: bool) {
        self.white_to_move = white;
    }

    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.grid[square.row as usize][square.col as usize]
    }

    pub fn set_piece(&mut self, square: Square, code: PieceCode) {
        self.grid[square.row as usize][square.col as usize] = code;
    }

    pub fn apply(&mut self, mv: Move) {
        let start = mv.start();
        let end = mv.end();
        let moving = self.piece_at(start);

        let placed = match mv.promotion() {
            PieceCode::EMPTY => moving,
            // The promotion code is the white one; black shifts it.
            promotion if self.white_to_move => promotion,
            promotion => PieceCode(promotion.0.saturating_add(PieceCode::BLACK_OFFSET)),
        };

        self.set_piece(end, placed);
        self.set_piece(start, PieceCode::EMPTY);
        self.white_to_move = !self.white_to_move;
    }

    pub fn apply_uci(&mut self, uci: &str) -> Result<(), MalformedMoveError> {
        let mv = Move::parse_uci(uci)?;
        self.apply(mv);
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut result = String::from(RULE);
        for row in self.grid.iter() {
            for code in row.iter() {
                result.push_str(SEPARATOR);
                result.push(code.symbol());
            }
            result.push_str(SEPARATOR);
            result.push('\n');
            result.push_str(RULE);
        }
        result
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

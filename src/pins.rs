use crate::board::{BoardState, Color, Piece};
use crate::moves::Square;

pub fn king_square(board: &BoardState, white: bool) -> Option<Square> {
    let color = if white { Color::White } else { Color::Black };
    Square::all().find(|&square| board.piece_at(square).decode() == Some((Piece::King, color)))
}

/// Unit step from the king toward the piece on `square` when that piece is
/// the only thing shielding its king from an enemy slider on the same line.
pub fn pin_direction(board: &BoardState, square: Square) -> Option<(i8, i8)> {
    let (piece, color) = board.piece_at(square).decode()?;
    if piece == Piece::King {
        return None;
    }
    let king = king_square(board, color == Color::White)?;

    let dr = square.row as i8 - king.row as i8;
    let df = square.col as i8 - king.col as i8;
    if !(dr == 0 || df == 0 || dr.abs() == df.abs()) {
        return None;
    }
    let step = (dr.signum(), df.signum());
    let diagonal = step.0 != 0 && step.1 != 0;

    // Everything between the king and the piece must be empty.
    let mut r = king.row as i8 + step.0;
    let mut f = king.col as i8 + step.1;
    while (r, f) != (square.row as i8, square.col as i8) {
        if !board.piece_at(Square::new(r as u8, f as u8)).is_empty() {
            return None;
        }
        r += step.0;
        f += step.1;
    }

    // Then the first piece beyond it decides.
    let mut r = square.row as i8 + step.0;
    let mut f = square.col as i8 + step.1;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        let code = board.piece_at(Square::new(r as u8, f as u8));
        if let Some((attacker, attacker_color)) = code.decode() {
            let slides_here = match attacker {
                Piece::Queen => true,
                Piece::Rook => !diagonal,
                Piece::Bishop => diagonal,
                _ => false,
            };
            return (attacker_color == color.opposite() && slides_here).then_some(step);
        }
        r += step.0;
        f += step.1;
    }

    None
}

pub fn is_pinned(board: &BoardState, square: Square) -> bool {
    pin_direction(board, square).is_some()
}

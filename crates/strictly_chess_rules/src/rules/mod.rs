//! Movement rules.
//!
//! Pure functions deciding whether a piece may travel between two squares.
//! Nothing in here touches turn order or selection, and nothing logs; the
//! caller decides what to do with a rejection.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

pub use king::check_king;
pub use knight::check_knight;
pub use pawn::check_pawn;
pub use sliding::{check_bishop, check_queen, check_rook, path_clear};

use super::action::MoveError;
use super::{Board, Cell, PieceKind, Square};

/// Validates a move by the piece standing on `from`.
///
/// Returns the reason for rejection when the move is not allowed. Turn order
/// is not considered; see [`crate::MoveContract`] for that.
pub fn validate_move(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    let piece = match board.get(from) {
        Cell::Empty => return Err(MoveError::EmptySource(from)),
        Cell::Occupied(piece) => piece,
    };

    match piece.kind {
        PieceKind::Pawn => check_pawn(board, piece, from, to),
        PieceKind::Knight => check_knight(from, to),
        PieceKind::Bishop => check_bishop(board, from, to),
        PieceKind::Rook => check_rook(board, from, to),
        PieceKind::Queen => check_queen(board, from, to),
        PieceKind::King => check_king(from, to),
    }
}

/// Returns true if the piece on `from` may move to `to`.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    validate_move(board, from, to).is_ok()
}

/// Signed file and rank distance from `from` to `to`.
pub(crate) fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file() as i8 - from.file() as i8,
        to.rank() as i8 - from.rank() as i8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_rejected() {
        let board = Board::new();
        let from = Square::new(3, 4).unwrap();
        let to = Square::new(3, 3).unwrap();
        assert_eq!(
            validate_move(&board, from, to),
            Err(MoveError::EmptySource(from))
        );
        assert!(!is_legal_move(&board, from, to));
    }

    #[test]
    fn test_deltas_signed() {
        let a = Square::new(1, 6).unwrap();
        let b = Square::new(4, 2).unwrap();
        assert_eq!(deltas(a, b), (3, -4));
        assert_eq!(deltas(b, a), (-3, 4));
    }
}

//! Pawn rule.
//!
//! A pawn only ever captures: it may land on any square holding an enemy
//! piece, at any distance and in any direction, and never on an empty square.
//! There is no forward push.

use super::super::action::MoveError;
use super::super::{Board, Piece, Square};

/// Checks a pawn move.
pub fn check_pawn(board: &Board, pawn: Piece, from: Square, to: Square) -> Result<(), MoveError> {
    match board.get(to).color() {
        Some(color) if color != pawn.color => Ok(()),
        _ => Err(MoveError::PawnNeedsTarget(from, to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_pawn_takes_anywhere() {
        let board = Board::new();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(check_pawn(&board, pawn, sq(0, 6), sq(7, 0)).is_ok());
        assert!(check_pawn(&board, pawn, sq(0, 6), sq(5, 1)).is_ok());
    }

    #[test]
    fn test_pawn_cannot_push() {
        let board = Board::new();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(
            check_pawn(&board, pawn, sq(4, 6), sq(4, 5)),
            Err(MoveError::PawnNeedsTarget(sq(4, 6), sq(4, 5)))
        );
    }

    #[test]
    fn test_pawn_cannot_take_own_piece() {
        let board = Board::new();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(check_pawn(&board, pawn, sq(2, 1), sq(2, 0)).is_err());
    }
}

//! Sliding pieces: bishop, rook, queen.
//!
//! Each needs the right geometry and an empty path strictly between source
//! and destination. What stands on the destination is never checked.

use super::super::action::MoveError;
use super::super::{Board, PieceKind, Square};
use super::deltas;

/// Obstruction scan from `from` towards `to`, exclusive at both ends.
///
/// Steps by the sign of each delta, so it walks a rank, a file or a diagonal
/// depending on the pair. The squares must be aligned on one of those lines.
/// Reports the first occupied square found.
pub fn path_clear(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    let (df, dr) = deltas(from, to);
    debug_assert!(df == 0 || dr == 0 || df.abs() == dr.abs());

    let (step_file, step_rank) = (df.signum(), dr.signum());
    let mut current = from;
    loop {
        current = match current.offset(step_file, step_rank) {
            Some(next) => next,
            None => return Ok(()),
        };
        if current == to {
            return Ok(());
        }
        if !board.is_empty(current) {
            return Err(MoveError::Blocked(current));
        }
    }
}

fn is_straight(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df == 0 || dr == 0
}

fn is_diagonal(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() == dr.abs()
}

/// Checks a bishop move.
pub fn check_bishop(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    if !is_diagonal(from, to) {
        return Err(MoveError::BadGeometry(PieceKind::Bishop, from, to));
    }
    path_clear(board, from, to)
}

/// Checks a rook move.
pub fn check_rook(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    if !is_straight(from, to) {
        return Err(MoveError::BadGeometry(PieceKind::Rook, from, to));
    }
    path_clear(board, from, to)
}

/// Checks a queen move.
///
/// Rook or bishop geometry, then one sign-stepped scan, which follows
/// whichever of the two lines the squares share.
pub fn check_queen(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    if !is_straight(from, to) && !is_diagonal(from, to) {
        return Err(MoveError::BadGeometry(PieceKind::Queen, from, to));
    }
    path_clear(board, from, to)
}

//! First-class move and error types.
//!
//! A move is a domain event: it names the squares involved and what was on
//! them, so the boundary can log or display it without re-reading the board.

use super::{Cell, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The piece that moved.
    pub piece: Piece,
    /// What stood on the destination before the move.
    pub captured: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Square, to: Square, piece: Piece, captured: Cell) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
        }
    }

    /// Returns the piece taken by this move, if any.
    pub fn capture(&self) -> Option<Piece> {
        self.captured.piece()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.captured {
            Cell::Empty => write!(f, "{} {} -> {}", self.piece, self.from, self.to),
            Cell::Occupied(taken) => {
                write!(f, "{} {} x {} {}", self.piece, self.from, taken, self.to)
            }
        }
    }
}

/// A requested move: the two squares picked by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

impl MoveRequest {
    /// Creates a new move request.
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Reason a move is not allowed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Source and destination are the same square.
    #[display("Source and destination are both {}", _0)]
    NullMove(Square),

    /// There is no piece on the source square.
    #[display("No piece at {}", _0)]
    EmptySource(Square),

    /// The piece on the source square belongs to the side not on move.
    #[display("{} piece at {} cannot move on the other side's turn", _0, _1)]
    WrongTurn(crate::Color, Square),

    /// A pawn may only move onto a square holding an enemy piece.
    #[display("Pawn at {} has no enemy piece to take at {}", _0, _1)]
    PawnNeedsTarget(Square, Square),

    /// The destination is not reachable with the piece's move shape.
    #[display("{:?} cannot move from {} to {}", _0, _1, _2)]
    BadGeometry(PieceKind, Square, Square),

    /// A sliding piece's path is obstructed.
    #[display("Move blocked by piece at {}", _0)]
    Blocked(Square),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

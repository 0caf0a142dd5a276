//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are always checked; postconditions run in
//! debug builds.

use super::action::{MoveError, MoveRequest};
use super::game::GameState;
use super::rules;
use super::{Cell, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: source and destination differ.
pub struct DistinctSquares;

impl DistinctSquares {
    /// Rejects a move that starts and ends on the same square.
    pub fn check(req: &MoveRequest) -> Result<(), MoveError> {
        if req.from == req.to {
            Err(MoveError::NullMove(req.from))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the source holds a piece of the side to move.
pub struct OwnPiece;

impl OwnPiece {
    /// Rejects an empty source or an opponent's piece.
    #[instrument(skip(game))]
    pub fn check(req: &MoveRequest, game: &GameState) -> Result<(), MoveError> {
        match game.piece_at(req.from) {
            Cell::Empty => Err(MoveError::EmptySource(req.from)),
            Cell::Occupied(piece) if piece.color != game.turn() => {
                Err(MoveError::WrongTurn(piece.color, req.from))
            }
            Cell::Occupied(_) => Ok(()),
        }
    }
}

/// Composite precondition: distinct squares, own piece, movement rule.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(req: &MoveRequest, game: &GameState) -> Result<(), MoveError> {
        DistinctSquares::check(req)?;
        OwnPiece::check(req, game)?;
        rules::validate_move(game.board(), req.from, req.to)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Source and destination differ
/// - Source holds a piece of the side to move
/// - The piece's movement rule allows the move
///
/// Postconditions:
/// - Turn passed to the other side
/// - Source is empty and destination holds the moved piece
/// - No piece appeared; at most one disappeared
pub struct MoveContract;

impl Contract<GameState, MoveRequest> for MoveContract {
    fn pre(game: &GameState, req: &MoveRequest) -> Result<(), MoveError> {
        LegalMove::check(req, game)
    }

    fn post(before: &GameState, after: &GameState, req: &MoveRequest) -> Result<(), MoveError> {
        let mut violations = Vec::new();

        if after.turn() != before.turn().opponent() {
            violations.push("turn did not pass to the opponent".to_string());
        }
        if !after.board().is_empty(req.from) {
            violations.push(format!("source {} still occupied", req.from));
        }
        if after.piece_at(req.to) != before.piece_at(req.from) {
            violations.push(format!("destination {} does not hold the moved piece", req.to));
        }
        if !MaterialConserved::holds(before, after) {
            violations.push("piece count changed by more than one capture".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: a move removes at most one piece and never adds one.
pub struct MaterialConserved;

impl MaterialConserved {
    /// Compares piece counts across a single move.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let before_count = before.board().piece_count();
        let after_count = after.board().piece_count();
        after_count <= before_count && before_count - after_count <= 1
    }
}

/// Invariant: no color has more pieces than it starts with.
pub struct StartingMaterialBound;

impl StartingMaterialBound {
    /// Counts pieces per color against the sixteen each side starts with.
    #[instrument(skip(game))]
    pub fn holds(game: &GameState) -> bool {
        let (white, black) = Square::all()
            .filter_map(|sq| game.piece_at(sq).color())
            .fold((0usize, 0usize), |(w, b), color| match color {
                crate::Color::White => (w + 1, b),
                crate::Color::Black => (w, b + 1),
            });
        let valid = white <= 16 && black <= 16;
        if !valid {
            warn!(white, black, "Starting material bound violated");
        }
        valid
    }
}

//! Selection state driven by pointer press and release.

use super::action::{Move, MoveError};
use super::Square;
use serde::{Deserialize, Serialize};

/// Which square, if any, the player has picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece of the side to move is selected and awaits a destination.
    Selected(Square),
}

impl Selection {
    /// Returns the selected square, if any.
    pub fn square(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected(square) => Some(square),
        }
    }

    /// Returns true if nothing is selected.
    pub fn is_idle(self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// What a pointer release did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerUpOutcome {
    /// Nothing was selected, so nothing happened.
    Ignored,
    /// Released on the selected square; selection cleared, no move tried.
    Deselected,
    /// The move was applied.
    Moved(Move),
    /// The move was refused; the board is unchanged.
    Rejected(MoveError),
}

impl PointerUpOutcome {
    /// Returns the applied move, if any.
    pub fn applied(&self) -> Option<&Move> {
        match self {
            PointerUpOutcome::Moved(mv) => Some(mv),
            _ => None,
        }
    }
}

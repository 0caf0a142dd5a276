//! Game state: the board, the turn flag and the current selection.

use super::action::{Move, MoveError, MoveRequest};
use super::contracts::{Contract, MoveContract, StartingMaterialBound};
use super::rules;
use super::selection::{PointerUpOutcome, Selection};
use super::{Board, Cell, Color, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// Owns the board exclusively. Renderers read it through [`GameState::board`]
/// or [`GameState::piece_at`]; mutation goes through the pointer handlers,
/// [`GameState::try_move`], [`GameState::apply_move`] or [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Color,
    selection: Selection,
}

impl GameState {
    /// Creates a game in the starting layout with White to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            selection: Selection::Idle,
        }
    }

    /// Creates a game from an arbitrary position.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: Selection::Idle,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the cell at the given square.
    pub fn piece_at(&self, square: Square) -> Cell {
        self.board.get(square)
    }

    /// Returns the color to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the selected square, if any.
    pub fn selection(&self) -> Option<Square> {
        self.selection.square()
    }

    /// Returns the full selection state.
    pub fn selection_state(&self) -> Selection {
        self.selection
    }

    /// Returns true if the piece on `from` may move to `to`.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        rules::is_legal_move(&self.board, from, to)
    }

    /// Moves whatever stands on `from` to `to` and passes the turn.
    ///
    /// Unchecked: legality and turn ownership are the caller's business. The
    /// source is cleared before the destination is written, so `from == to`
    /// leaves the piece in place. Returns `None` when the source was empty.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Move> {
        let moving = self.board.get(from);
        let captured = self.board.get(to);
        self.board.set(from, Cell::Empty);
        self.board.set(to, moving);
        self.turn = self.turn.opponent();
        moving
            .piece()
            .map(|piece| Move::new(from, to, piece, captured))
    }

    /// Validates and applies a move by the side to move.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition; the board is untouched then.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let request = MoveRequest::new(from, to);
        MoveContract::pre(self, &request)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let applied = self
            .apply_move(from, to)
            .ok_or(MoveError::EmptySource(from))?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self, &request)?;

        debug_assert!(
            StartingMaterialBound::holds(self),
            "Starting material bound violated"
        );

        Ok(applied)
    }

    /// Pointer-press transition of the selection state machine.
    ///
    /// From `Idle`, selects the square if it holds a piece of the side to
    /// move. From `Selected`, clears the selection whatever was pressed.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn select_square(&mut self, square: Square) -> Selection {
        self.selection = match self.selection {
            Selection::Selected(_) => Selection::Idle,
            Selection::Idle => match self.board.get(square).color() {
                Some(color) if color == self.turn => Selection::Selected(square),
                _ => Selection::Idle,
            },
        };
        self.selection
    }

    /// Handles a pointer press on a board square.
    pub fn on_pointer_down(&mut self, square: Square) -> Selection {
        let selection = self.select_square(square);
        debug!(%square, ?selection, "Pointer down");
        selection
    }

    /// Handles a pointer release on a board square.
    ///
    /// Releasing on the selected square deselects. Releasing elsewhere tries
    /// the move; either way the selection ends up `Idle`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn on_pointer_up(&mut self, square: Square) -> PointerUpOutcome {
        let from = match self.selection {
            Selection::Idle => return PointerUpOutcome::Ignored,
            Selection::Selected(from) => from,
        };
        self.selection = Selection::Idle;

        if from == square {
            debug!(%square, "Released on selected square");
            return PointerUpOutcome::Deselected;
        }

        match self.try_move(from, square) {
            Ok(applied) => {
                info!(%applied, next = %self.turn, "Move applied");
                PointerUpOutcome::Moved(applied)
            }
            Err(reason) => {
                debug!(%from, to = %square, %reason, "Move rejected");
                PointerUpOutcome::Rejected(reason)
            }
        }
    }

    /// Restores the starting layout, White to move, nothing selected.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::White;
        self.selection = Selection::Idle;
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_apply_move_flips_turn_once() {
        let mut game = GameState::new();
        game.apply_move(sq(1, 7), sq(2, 5));
        assert_eq!(game.turn(), Color::Black);
        game.apply_move(sq(1, 0), sq(2, 2));
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_apply_move_from_empty_square() {
        let mut game = GameState::new();
        assert!(game.apply_move(sq(3, 3), sq(3, 4)).is_none());
        assert_eq!(game.turn(), Color::Black);
        assert!(game.piece_at(sq(3, 4)).is_empty());
    }

    #[test]
    fn test_apply_move_onto_itself_keeps_piece() {
        let mut game = GameState::new();
        let king = game.piece_at(sq(4, 7));
        game.apply_move(sq(4, 7), sq(4, 7));
        assert_eq!(game.piece_at(sq(4, 7)), king);
    }

    #[test]
    fn test_try_move_leaves_board_on_error() {
        let mut game = GameState::new();
        let before = game.clone();
        assert!(game.try_move(sq(4, 6), sq(4, 4)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_second_press_clears_selection() {
        let mut game = GameState::new();
        game.on_pointer_down(sq(4, 6));
        assert_eq!(game.selection(), Some(sq(4, 6)));
        game.on_pointer_down(sq(3, 6));
        assert_eq!(game.selection(), None);
    }
}

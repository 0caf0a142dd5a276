//! Chess rules engine.
//!
//! Owns an 8x8 board, decides whether a piece may travel between two squares,
//! tracks whose turn it is and which square is selected, and applies moves.
//! It has no UI or I/O dependencies; front ends drive it through
//! [`GameState::on_pointer_down`], [`GameState::on_pointer_up`] and
//! [`GameState::reset`], and read it through [`GameState::piece_at`],
//! [`GameState::turn`] and [`GameState::selection`].
//!
//! The movement rules are deliberately partial:
//!
//! - pawns only capture, anywhere on the board
//! - knights move in an L, onto any square
//! - bishops, rooks and queens slide along clear lines, onto any square
//! - kings go anywhere
//!
//! There is no check, castling, en passant or promotion.
//!
//! # Example
//!
//! ```
//! use strictly_chess_rules::{Color, GameState, PointerUpOutcome, Square};
//!
//! let mut game = GameState::new();
//! let knight = Square::new(1, 7).unwrap();
//! let target = Square::new(2, 5).unwrap();
//!
//! game.on_pointer_down(knight);
//! let outcome = game.on_pointer_up(target);
//!
//! assert!(matches!(outcome, PointerUpOutcome::Moved(_)));
//! assert_eq!(game.turn(), Color::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod selection;
mod types;

pub mod rules;

pub use action::{Move, MoveError, MoveRequest};
pub use contracts::{
    Contract, DistinctSquares, LegalMove, MaterialConserved, MoveContract, OwnPiece,
    StartingMaterialBound,
};
pub use game::GameState;
pub use rules::{is_legal_move, validate_move};
pub use selection::{PointerUpOutcome, Selection};
pub use types::{Board, Cell, Color, Piece, PieceKind, Square};

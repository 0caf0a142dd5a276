//! Strictly Chess - terminal front end for the chess rules engine.
//!
//! # Architecture
//!
//! - **Rules**: the `strictly_chess_rules` crate owns the board, legality and
//!   turn/selection state
//! - **TUI**: renders the board, maps mouse and keyboard input to squares,
//!   and forwards press/release/reset to the engine
//! - **Config**: optional TOML file for tile colours, tile size and log path

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod tui;

pub use config::{ConfigError, Rgb, UiConfig};
pub use tui::{run_tui, App, BoardGeometry};

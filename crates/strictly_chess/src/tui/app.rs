//! Application state and logic.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_chess_rules::{GameState, PointerUpOutcome, Selection, Square};
use tracing::{debug, instrument};

use super::input::{move_cursor, BoardGeometry};

const START_CURSOR: Square = match Square::new(4, 6) {
    Some(square) => square,
    None => panic!("cursor start is off the board"),
};

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Square,
    geometry: Option<BoardGeometry>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: START_CURSOR,
            geometry: None,
            status_message: "Drag a piece with the mouse, or use arrows + Space/Enter.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the renderer put the board, for mouse mapping.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(' ') => self.pointer_down(self.cursor),
            KeyCode::Enter => self.pointer_up(self.cursor),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let Some(square) = geometry.square_at(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(square),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(square),
            _ => {}
        }
    }

    /// Presses on a square.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, square: Square) {
        self.cursor = square;
        self.status_message = match self.game.on_pointer_down(square) {
            Selection::Selected(at) => match self.game.piece_at(at).piece() {
                Some(piece) => format!("Selected {} at {}", piece, at),
                None => format!("Selected {}", at),
            },
            Selection::Idle => format!("{} to move", self.game.turn()),
        };
    }

    /// Releases on a square.
    #[instrument(skip(self))]
    pub fn pointer_up(&mut self, square: Square) {
        self.cursor = square;
        match self.game.on_pointer_up(square) {
            PointerUpOutcome::Ignored => {}
            PointerUpOutcome::Deselected => {
                self.status_message = "Selection cleared".to_string();
            }
            PointerUpOutcome::Moved(applied) => {
                self.status_message = format!("{}. {} to move", applied, self.game.turn());
            }
            PointerUpOutcome::Rejected(reason) => {
                self.status_message = format!("Illegal move: {}", reason);
            }
        }
    }

    /// Restarts the game.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = "Game reset. White to move.".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

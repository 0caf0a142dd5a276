//! Tests for the terminal app: input mapping into the engine and rendering.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use strictly_chess::{tui::draw, App, BoardGeometry, UiConfig};
use strictly_chess_rules::{Cell, Color, Piece, PieceKind, Square};

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).expect("square on board")
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn app_with_geometry() -> (App, BoardGeometry) {
    let mut app = App::new();
    let geometry = BoardGeometry::new(0, 0, 4, 2);
    app.set_geometry(geometry);
    (app, geometry)
}

fn click_point(geometry: &BoardGeometry, square: Square) -> (u16, u16) {
    let rect = geometry.tile_rect(square);
    (rect.x + 1, rect.y)
}

#[test]
fn test_mouse_drag_moves_piece() {
    let (mut app, geometry) = app_with_geometry();
    let (fx, fy) = click_point(&geometry, sq(1, 7));
    let (tx, ty) = click_point(&geometry, sq(2, 5));

    app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));
    assert_eq!(app.game().selection(), Some(sq(1, 7)));
    app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), tx, ty));

    assert_eq!(
        app.game().piece_at(sq(2, 5)),
        Cell::Occupied(Piece::new(PieceKind::Knight, Color::White))
    );
    assert_eq!(app.game().turn(), Color::Black);
    assert!(app.status_message().contains("Black to move"));
}

#[test]
fn test_clicks_off_board_never_reach_engine() {
    let (mut app, geometry) = app_with_geometry();
    let (fx, fy) = click_point(&geometry, sq(0, 6));
    app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));

    app.handle_event(&mouse(
        MouseEventKind::Up(MouseButton::Left),
        geometry.width() + 5,
        3,
    ));

    assert_eq!(app.game().selection(), Some(sq(0, 6)));
    assert_eq!(app.game().turn(), Color::White);
}

#[test]
fn test_right_button_ignored() {
    let (mut app, geometry) = app_with_geometry();
    let (fx, fy) = click_point(&geometry, sq(0, 6));
    app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), fx, fy));
    assert_eq!(app.game().selection(), None);
}

#[test]
fn test_keyboard_pick_and_drop() {
    let mut app = App::new();
    // cursor starts on (4,6); walk to the knight on (6,7)
    app.handle_event(&key(KeyCode::Down));
    app.handle_event(&key(KeyCode::Right));
    app.handle_event(&key(KeyCode::Right));
    assert_eq!(app.cursor(), sq(6, 7));

    app.handle_event(&key(KeyCode::Char(' ')));
    assert_eq!(app.game().selection(), Some(sq(6, 7)));

    app.handle_event(&key(KeyCode::Up));
    app.handle_event(&key(KeyCode::Up));
    app.handle_event(&key(KeyCode::Left));
    app.handle_event(&key(KeyCode::Enter));

    assert_eq!(
        app.game().piece_at(sq(5, 5)),
        Cell::Occupied(Piece::new(PieceKind::Knight, Color::White))
    );
    assert_eq!(app.game().turn(), Color::Black);
}

#[test]
fn test_illegal_move_reported() {
    let mut app = App::new();
    app.pointer_down(sq(4, 6));
    app.pointer_up(sq(4, 4));
    assert!(app.status_message().starts_with("Illegal move"));
    assert_eq!(app.game().selection(), None);
    assert_eq!(app.game().turn(), Color::White);
}

#[test]
fn test_reset_key() {
    let mut app = App::new();
    app.pointer_down(sq(0, 6));
    app.pointer_up(sq(1, 1));
    assert_eq!(app.game().turn(), Color::Black);

    app.handle_event(&key(KeyCode::Char('r')));
    assert_eq!(app.game().turn(), Color::White);
    assert!(app.game().piece_at(sq(0, 6)).piece().is_some());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_key() {
    let mut app = App::new();
    app.handle_event(&key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_draw_shows_board_and_turn() {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
    let mut app = App::new();
    let config = UiConfig::default();

    let mut geometry = None;
    terminal
        .draw(|frame| geometry = Some(draw(frame, &app, &config)))
        .expect("draw");
    let geometry = geometry.expect("geometry reported");

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("White to move"));
    assert!(screen.contains('k'));
    assert!(screen.contains('K'));

    // the reported geometry maps back onto the drawn tiles
    let king = geometry.tile_rect(sq(4, 7));
    assert_eq!(geometry.square_at(king.x, king.y), Some(sq(4, 7)));

    app.pointer_down(sq(0, 6));
    app.pointer_up(sq(1, 1));
    terminal
        .draw(|frame| {
            draw(frame, &app, &config);
        })
        .expect("draw");
    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Black to move"));
}

#[test]
fn test_small_terminal_clicks_below_board_ignored() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
    let mut app = App::new();
    let config = UiConfig::default();

    let mut geometry = None;
    terminal
        .draw(|frame| geometry = Some(draw(frame, &app, &config)))
        .expect("draw");
    let geometry = geometry.expect("geometry reported");
    app.set_geometry(geometry);

    // row 17 sits inside the status box; rank 7 would lie there if unclipped
    assert_eq!(geometry.square_at(1, 17), None);
    app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 17));
    assert_eq!(app.game().selection(), None);
    assert_eq!(app.game().turn(), Color::White);
}

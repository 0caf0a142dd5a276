//! Stateless UI rendering for the chess board.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strictly_chess_rules::{Cell, Color as Side, GameState, Square};

use super::app::App;
use super::input::BoardGeometry;
use crate::config::{Rgb, UiConfig};

const SIDE_PANEL_WIDTH: u16 = 22;

/// Renders the whole screen and returns where the board tiles ended up.
pub fn draw(frame: &mut Frame, app: &App, config: &UiConfig) -> BoardGeometry {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Board + side panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = Paragraph::new("Strictly Chess")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(chunks[1]);

    let geometry = draw_board(frame, body[0], app, config);
    draw_side_panel(frame, body[1], app.game());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let keys = Paragraph::new("drag: move  arrows: cursor  space: pick  enter: drop  r: reset  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[3]);

    geometry
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, config: &UiConfig) -> BoardGeometry {
    let tile_width = *config.tile_width();
    let tile_height = *config.tile_height();
    let width = tile_width.saturating_mul(8).saturating_add(2);
    let height = tile_height.saturating_mul(8).saturating_add(2);

    let outer = center_rect(area, width, height);
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let geometry =
        BoardGeometry::new(inner.x, inner.y, tile_width, tile_height).clipped_to(inner);
    let game = app.game();

    for square in Square::all() {
        let tile = geometry.tile_rect(square).intersection(inner);
        if tile.is_empty() {
            continue;
        }
        draw_tile(frame, tile, game, square, app.cursor(), config);
    }

    geometry
}

fn draw_tile(
    frame: &mut Frame,
    tile: Rect,
    game: &GameState,
    square: Square,
    cursor: Square,
    config: &UiConfig,
) {
    let light = (square.file() + square.rank()) % 2 == 0;
    let mut background = if light {
        rgb(*config.light_square())
    } else {
        rgb(*config.dark_square())
    };
    if game.selection() == Some(square) {
        background = Color::Yellow;
    } else if square == cursor {
        background = Color::LightBlue;
    }

    let (symbol, foreground) = match game.piece_at(square) {
        Cell::Empty => (' ', Color::Reset),
        Cell::Occupied(piece) => (
            piece.symbol(),
            match piece.color {
                Side::White => Color::White,
                Side::Black => Color::Black,
            },
        ),
    };

    let mut lines: Vec<Line> = vec![Line::from(""); usize::from(tile.height.saturating_sub(1) / 2)];
    lines.push(Line::from(Span::styled(
        symbol.to_string(),
        Style::default().fg(foreground).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, tile);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, game: &GameState) {
    let turn_style = match game.turn() {
        Side::White => Style::default().fg(Color::Black).bg(Color::White),
        Side::Black => Style::default().fg(Color::White).bg(Color::Black),
    };

    let selection = match game.selection() {
        Some(square) => format!("Selected: {}", square),
        None => "Selected: -".to_string(),
    };

    let text = vec![
        Line::from(Span::styled(
            format!(" {} to move ", game.turn()),
            turn_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(selection),
        Line::from(format!("Pieces: {}", game.board().piece_count())),
    ];

    let panel = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Turn "));
    frame.render_widget(panel, area);
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

//! Mapping terminal input onto board squares.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strictly_chess_rules::Square;

/// Where the board was last drawn, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    tile_width: u16,
    tile_height: u16,
    /// Part of the terminal the tiles were actually drawn into.
    visible: Rect,
}

impl BoardGeometry {
    /// Creates a geometry with rank 0, file 0 at `(origin_x, origin_y)`.
    ///
    /// Tile sizes of zero are treated as one.
    pub fn new(origin_x: u16, origin_y: u16, tile_width: u16, tile_height: u16) -> Self {
        let tile_width = tile_width.max(1);
        let tile_height = tile_height.max(1);
        Self {
            origin_x,
            origin_y,
            tile_width,
            tile_height,
            visible: Rect::new(
                origin_x,
                origin_y,
                tile_width.saturating_mul(8),
                tile_height.saturating_mul(8),
            ),
        }
    }

    /// Restricts hit-testing to the part of the board that fit on screen.
    pub fn clipped_to(mut self, area: Rect) -> Self {
        self.visible = self.visible.intersection(area);
        self
    }

    /// Total width of the eight files.
    pub fn width(&self) -> u16 {
        self.tile_width.saturating_mul(8)
    }

    /// Total height of the eight ranks.
    pub fn height(&self) -> u16 {
        self.tile_height.saturating_mul(8)
    }

    /// Maps a terminal cell to the square under it.
    ///
    /// Returns `None` for cells off the board or outside the visible part of
    /// it; those never reach the engine.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        let visible = self.visible;
        if column < visible.x
            || row < visible.y
            || column >= visible.right()
            || row >= visible.bottom()
        {
            return None;
        }
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        let file = u8::try_from(dx / self.tile_width).ok()?;
        let rank = u8::try_from(dy / self.tile_height).ok()?;
        Square::new(file, rank)
    }

    /// The terminal rectangle covered by a square.
    pub fn tile_rect(&self, square: Square) -> Rect {
        Rect::new(
            self.origin_x
                .saturating_add(u16::from(square.file()) * self.tile_width),
            self.origin_y
                .saturating_add(u16::from(square.rank()) * self.tile_height),
            self.tile_width,
            self.tile_height,
        )
    }
}

/// Moves the keyboard cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let (df, dr) = match key {
        KeyCode::Right => (1, 0),
        KeyCode::Left => (-1, 0),
        KeyCode::Down => (0, 1),
        KeyCode::Up => (0, -1),
        _ => (0, 0),
    };
    cursor.offset(df, dr).unwrap_or(cursor)
}

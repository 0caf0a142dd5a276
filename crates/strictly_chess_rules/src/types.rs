//! Core domain types for the chess rules engine.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Color {
    /// White (moves first).
    White,
    /// Black.
    Black,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the display label for this color.
    pub fn label(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Movement class of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PieceKind {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl PieceKind {
    /// Uppercase letter used for this kind (P, N, B, R, Q, K).
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece: a kind and the color that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Movement class.
    pub kind: PieceKind,
    /// Owner.
    pub color: Color,
}

impl Piece {
    /// Creates a new piece.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Letter for this piece: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of one square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece on the square.
    #[default]
    Empty,
    /// Square holds a piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece on this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Returns true if the cell holds no piece.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the color of the piece on this cell, if any.
    pub fn color(self) -> Option<Color> {
        self.piece().map(|piece| piece.color)
    }
}

/// A coordinate on the 8x8 board.
///
/// Both `file` and `rank` lie in `0..8`. The only public constructor is
/// [`Square::new`], which rejects anything outside that range, so every
/// `Square` the engine sees is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square from file and rank (both `0..8`).
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < Board::SIZE as u8 && rank < Board::SIZE as u8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Column, 0 on the left.
    pub fn file(self) -> u8 {
        self.file
    }

    /// Row, 0 at the top (Black's back rank).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the square shifted by the given deltas, if it stays on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = i16::from(self.file) + i16::from(file_delta);
        let rank = i16::from(self.rank) + i16::from(rank_delta);
        let file = u8::try_from(file).ok()?;
        let rank = u8::try_from(rank).ok()?;
        Self::new(file, rank)
    }

    /// All 64 squares, rank by rank from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Board::SIZE as u8)
            .flat_map(|rank| (0..Board::SIZE as u8).map(move |file| Square { file, rank }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 chess board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[rank][file]`, rank 0 first.
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Number of files and ranks.
    pub const SIZE: usize = 8;

    /// Creates a board in the starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Overwrites every cell with the starting layout.
    pub fn reset(&mut self) {
        for (rank, row) in self.cells.iter_mut().enumerate() {
            for (file, cell) in row.iter_mut().enumerate() {
                *cell = match rank {
                    0 => Cell::Occupied(Piece::new(BACK_RANK[file], Color::Black)),
                    1 => Cell::Occupied(Piece::new(PieceKind::Pawn, Color::Black)),
                    6 => Cell::Occupied(Piece::new(PieceKind::Pawn, Color::White)),
                    7 => Cell::Occupied(Piece::new(BACK_RANK[file], Color::White)),
                    _ => Cell::Empty,
                };
            }
        }
    }

    /// Gets the cell at the given square.
    pub fn get(&self, square: Square) -> Cell {
        self.cells[usize::from(square.rank)][usize::from(square.file)]
    }

    /// Sets the cell at the given square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[usize::from(square.rank)][usize::from(square.file)] = cell;
    }

    /// Places a piece at the given square.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Cell::Occupied(piece));
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Returns the rows of the board, rank 0 first.
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Counts the pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Formats the board as a human-readable string, rank 0 on the first line.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (rank, row) in self.cells.iter().enumerate() {
            result.push_str(&format!("{rank} "));
            for cell in row {
                result.push(' ');
                result.push(cell.piece().map_or('.', Piece::symbol));
            }
            result.push('\n');
        }
        result.push_str("   0 1 2 3 4 5 6 7");
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(sq.offset(1, 2), Square::new(1, 2));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).unwrap().offset(1, 1), None);
    }

    #[test]
    fn test_all_squares_unique() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        let unique: std::collections::HashSet<_> = squares.iter().collect();
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn test_piece_symbol_case() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).symbol(), 'n');
    }

    #[test]
    fn test_display_first_line_is_black_back_rank() {
        let board = Board::new();
        let first = board.display().lines().next().unwrap().to_string();
        assert_eq!(first, "0  r n b q k b n r");
    }

    #[test]
    fn test_reset_overwrites_in_place() {
        let mut board = Board::empty();
        board.place(
            Square::new(3, 3).unwrap(),
            Piece::new(PieceKind::Queen, Color::White),
        );
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.piece_count(), 32);
    }
}

//! Board module - tile grid construction and queries
//!
//! The board deals a shuffled deck of paired faces, then lays tiles out on
//! the fixed surface by integer division of the grid, skipping the reserved
//! score column. Dealing happens before layout, so "which face" and "where"
//! stay independently testable.
//!
//! Tiles are owned exclusively by their board and never destroyed during a
//! session; winning is a derived condition (`all_matched`), not removal.

use std::fmt;

use tui_memory_types::{
    Face, FaceId, Point, Rect, BOARD_COLS, BOARD_ROWS, RESERVED_COLUMN, SURFACE_H, SURFACE_W,
};

use crate::rng::SimpleRng;

/// Configuration faults detected while building a board.
///
/// These are precondition violations. They abort setup with a descriptive
/// error and can never reach the per-frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The grid has no playable slots.
    EmptyBoard,
    /// Playable slots cannot be paired up.
    OddSlotCount { slots: usize },
    /// The reserved score column is not a column of the grid.
    ReservedColumnOutOfBounds { column: u8, cols: u8 },
    /// More pairs than distinct face identifiers.
    TooManyPairs { pairs: usize },
    /// The grid is finer than the surface it is laid out on.
    SurfaceTooSmall { rows: u8, cols: u8 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyBoard => write!(f, "board has no playable tiles"),
            SetupError::OddSlotCount { slots } => {
                write!(f, "playable tile count {} is odd and cannot be paired", slots)
            }
            SetupError::ReservedColumnOutOfBounds { column, cols } => {
                write!(f, "reserved column {} is outside the {}-column grid", column, cols)
            }
            SetupError::TooManyPairs { pairs } => {
                write!(f, "{} pairs exceed the face identifier space", pairs)
            }
            SetupError::SurfaceTooSmall { rows, cols } => {
                write!(f, "a {}x{} grid does not fit the playing surface", rows, cols)
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// A single grid cell with a hidden and a revealed visual identity.
///
/// Exactly one other tile on the board carries the same `face_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    rect: Rect,
    face_id: FaceId,
    face: Face,
}

impl Tile {
    fn new(rect: Rect, face_id: FaceId) -> Self {
        Self {
            rect,
            face_id,
            face: Face::Hidden,
        }
    }

    /// Region of the surface this tile occupies.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The revealed-face identifier this tile is paired by.
    pub fn face_id(&self) -> FaceId {
        self.face_id
    }

    /// Which side is currently showing.
    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_revealed(&self) -> bool {
        self.face == Face::Revealed
    }

    /// Check whether a surface position falls on this tile.
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Toggle between hidden and revealed. Its own inverse.
    pub(crate) fn flip(&mut self) {
        self.face = match self.face {
            Face::Hidden => Face::Revealed,
            Face::Revealed => Face::Hidden,
        };
    }
}

/// The tile grid. Shape is immutable after construction; tiles mutate in
/// place via flips.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    reserved_column: u8,
    /// Playable tiles in row-major order (the reserved column is skipped).
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board with the default 4x5 grid, last column reserved.
    pub fn new(seed: u32) -> Self {
        match Self::with_layout(BOARD_ROWS, BOARD_COLS, RESERVED_COLUMN, seed) {
            Ok(board) => board,
            Err(_) => unreachable!("default layout constants are valid"),
        }
    }

    /// Create a board with an explicit grid shape.
    ///
    /// One column per row is reserved for the score display and never
    /// receives a tile, so the playable slot count is `rows * (cols - 1)`.
    /// That count must be even and non-zero.
    pub fn with_layout(
        rows: u8,
        cols: u8,
        reserved_column: u8,
        seed: u32,
    ) -> Result<Self, SetupError> {
        if reserved_column >= cols {
            return Err(SetupError::ReservedColumnOutOfBounds {
                column: reserved_column,
                cols,
            });
        }
        if rows as u16 > SURFACE_H || cols as u16 > SURFACE_W {
            return Err(SetupError::SurfaceTooSmall { rows, cols });
        }

        let slots = rows as usize * (cols as usize - 1);
        let mut rng = SimpleRng::new(seed);
        let deck = Self::deal_faces(slots, &mut rng)?;

        let tile_w = SURFACE_W / cols as u16;
        let tile_h = SURFACE_H / rows as u16;

        let mut tiles = Vec::with_capacity(slots);
        for row in 0..rows {
            for col in 0..cols {
                if col == reserved_column {
                    continue;
                }
                let rect = Rect::new(
                    col as u16 * tile_w,
                    row as u16 * tile_h,
                    tile_w,
                    tile_h,
                );
                tiles.push(Tile::new(rect, deck[tiles.len()]));
            }
        }

        Ok(Self {
            rows,
            cols,
            reserved_column,
            tiles,
        })
    }

    /// Deal a shuffled deck of paired faces for `slots` tiles.
    ///
    /// Produces `slots / 2` distinct identifiers, each appearing exactly
    /// twice. The slot count must be even and non-zero.
    pub fn deal_faces(slots: usize, rng: &mut SimpleRng) -> Result<Vec<FaceId>, SetupError> {
        if slots == 0 {
            return Err(SetupError::EmptyBoard);
        }
        if slots % 2 != 0 {
            return Err(SetupError::OddSlotCount { slots });
        }
        let pairs = slots / 2;
        // FaceId is a u8, so 256 distinct pairs is the ceiling.
        if pairs > (u8::MAX as usize) + 1 {
            return Err(SetupError::TooManyPairs { pairs });
        }

        let mut deck = Vec::with_capacity(slots);
        for id in 0..pairs {
            deck.push(FaceId(id as u8));
            deck.push(FaceId(id as u8));
        }
        rng.shuffle(&mut deck);
        Ok(deck)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Column of the grid kept free of tiles for the score readout.
    pub fn reserved_column(&self) -> u8 {
        self.reserved_column
    }

    /// Playable tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tile by index. Indices come from [`Board::hit_test`] and stay valid
    /// for the board's lifetime.
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// Find the tile under a surface position.
    ///
    /// The returned index doubles as the tile's identity for selection
    /// tracking. Positions in the reserved column, in the gaps left by
    /// integer division, or outside the grid hit nothing.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.contains(p))
    }

    /// True when every tile shows its revealed face.
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(Tile::is_revealed)
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_shape() {
        let board = Board::new(1);
        assert_eq!(board.rows(), BOARD_ROWS);
        assert_eq!(board.cols(), BOARD_COLS);
        assert_eq!(board.reserved_column(), RESERVED_COLUMN);
        assert_eq!(board.tile_count(), 16);
        assert!(board.tiles().iter().all(|t| t.face() == Face::Hidden));
    }

    #[test]
    fn test_deal_faces_pairs_every_id_exactly_twice() {
        let mut rng = SimpleRng::new(42);
        for slots in [2usize, 4, 8, 16, 30] {
            let deck = Board::deal_faces(slots, &mut rng).unwrap();
            assert_eq!(deck.len(), slots);

            let mut counts = vec![0usize; slots / 2];
            for face in &deck {
                counts[face.index()] += 1;
            }
            assert!(counts.iter().all(|&c| c == 2), "slots={}: {:?}", slots, counts);
        }
    }

    #[test]
    fn test_deal_faces_rejects_odd_and_empty() {
        let mut rng = SimpleRng::new(42);
        assert_eq!(Board::deal_faces(0, &mut rng), Err(SetupError::EmptyBoard));
        assert_eq!(
            Board::deal_faces(7, &mut rng),
            Err(SetupError::OddSlotCount { slots: 7 })
        );
    }

    #[test]
    fn test_deal_faces_rejects_identifier_overflow() {
        let mut rng = SimpleRng::new(42);
        assert_eq!(
            Board::deal_faces(514, &mut rng),
            Err(SetupError::TooManyPairs { pairs: 257 })
        );
        // 256 pairs is exactly the u8 space and still fine.
        assert!(Board::deal_faces(512, &mut rng).is_ok());
    }

    #[test]
    fn test_with_layout_rejects_bad_reserved_column() {
        assert_eq!(
            Board::with_layout(4, 5, 5, 1),
            Err(SetupError::ReservedColumnOutOfBounds { column: 5, cols: 5 })
        );
    }

    #[test]
    fn test_with_layout_rejects_grid_finer_than_surface() {
        assert!(matches!(
            Board::with_layout(BOARD_ROWS, 60, 0, 1),
            Err(SetupError::SurfaceTooSmall { .. })
        ));
    }

    #[test]
    fn test_reserved_column_never_holds_a_tile() {
        // Reserve a middle column so the gap is surrounded by tiles.
        let board = Board::with_layout(2, 5, 2, 9).unwrap();
        assert_eq!(board.tile_count(), 2 * 4);

        let tile_w = SURFACE_W / 5;
        let reserved_x = 2 * tile_w;
        for tile in board.tiles() {
            let r = tile.rect();
            assert!(
                r.x + r.w <= reserved_x || r.x >= reserved_x + tile_w,
                "tile at {:?} overlaps the reserved column",
                r
            );
        }

        // A click in the middle of the reserved column hits nothing.
        let p = Point::new(reserved_x + tile_w / 2, SURFACE_H / 2);
        assert_eq!(board.hit_test(p), None);
    }

    #[test]
    fn test_tiles_are_laid_out_row_major_without_overlap() {
        let board = Board::new(3);
        for (i, a) in board.tiles().iter().enumerate() {
            for b in board.tiles().iter().skip(i + 1) {
                assert!(!b.rect().contains(a.rect().center()));
            }
        }
    }

    #[test]
    fn test_hit_test_finds_each_tile_by_center() {
        let board = Board::new(5);
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(board.hit_test(tile.rect().center()), Some(i));
        }
    }

    #[test]
    fn test_hit_test_misses_outside_surface() {
        let board = Board::new(5);
        assert_eq!(board.hit_test(Point::new(SURFACE_W, 0)), None);
        assert_eq!(board.hit_test(Point::new(0, SURFACE_H)), None);
        assert_eq!(board.hit_test(Point::new(u16::MAX, u16::MAX)), None);
    }

    #[test]
    fn test_flip_is_its_own_inverse() {
        let mut board = Board::new(8);
        let before = *board.tile(0);

        board.tile_mut(0).flip();
        assert!(board.tile(0).is_revealed());
        assert_eq!(board.tile(0).face_id(), before.face_id());
        assert_eq!(board.tile(0).rect(), before.rect());

        board.tile_mut(0).flip();
        assert_eq!(*board.tile(0), before);
    }

    #[test]
    fn test_all_matched_only_when_every_tile_revealed() {
        let mut board = Board::with_layout(1, 3, 2, 4).unwrap();
        assert!(!board.all_matched());

        board.tile_mut(0).flip();
        assert!(!board.all_matched());

        board.tile_mut(1).flip();
        assert!(board.all_matched());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Board::new(777);
        let b = Board::new(777);
        let faces_a: Vec<_> = a.tiles().iter().map(Tile::face_id).collect();
        let faces_b: Vec<_> = b.tiles().iter().map(Tile::face_id).collect();
        assert_eq!(faces_a, faces_b);
    }

    #[test]
    fn test_seeds_vary_the_deal() {
        let reference: Vec<_> = Board::new(1).tiles().iter().map(Tile::face_id).collect();
        let diverged = (2u32..10).any(|seed| {
            let faces: Vec<_> = Board::new(seed).tiles().iter().map(Tile::face_id).collect();
            faces != reference
        });
        assert!(diverged);
    }
}

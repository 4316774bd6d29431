//! Sprite atlas - the asset resolver for tile faces.
//!
//! Face artwork is resolved once, before the frame loop starts. Rendering
//! then reads the table directly and can no longer fail; a board face with
//! no registered sprite is a setup error, surfaced with the rest of the
//! configuration checks.

use anyhow::{bail, Result};

use tui_memory_core::Board;
use tui_memory_types::FaceId;

use crate::fb::Rgb;

/// Drawable face artwork: one glyph plus its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: char,
    pub color: Rgb,
}

/// Shared artwork for every hidden tile.
const BACK_SPRITE: Sprite = Sprite {
    glyph: '░',
    color: Rgb::new(110, 110, 125),
};

/// Revealed-face artwork, indexed by `FaceId`. Ten entries cover boards up
/// to ten pairs; the default board uses eight.
const FACE_SPRITES: [Sprite; 10] = [
    Sprite { glyph: '♥', color: Rgb::new(220, 80, 80) },
    Sprite { glyph: '♦', color: Rgb::new(255, 165, 0) },
    Sprite { glyph: '♣', color: Rgb::new(100, 220, 120) },
    Sprite { glyph: '♠', color: Rgb::new(120, 150, 240) },
    Sprite { glyph: '★', color: Rgb::new(240, 220, 80) },
    Sprite { glyph: '●', color: Rgb::new(80, 220, 220) },
    Sprite { glyph: '▲', color: Rgb::new(200, 120, 220) },
    Sprite { glyph: '■', color: Rgb::new(90, 220, 180) },
    Sprite { glyph: '♪', color: Rgb::new(230, 140, 170) },
    Sprite { glyph: '◆', color: Rgb::new(170, 170, 255) },
];

/// Lookup from face identifiers to loaded artwork.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    faces: Vec<Sprite>,
    back: Sprite,
}

impl SpriteAtlas {
    /// Resolve artwork for every face `board` can show.
    ///
    /// Fails fast if the board deals more pairs than the atlas has faces.
    pub fn for_board(board: &Board) -> Result<Self> {
        for tile in board.tiles() {
            let index = tile.face_id().index();
            if index >= FACE_SPRITES.len() {
                bail!(
                    "no sprite registered for face {} (atlas holds {})",
                    index,
                    FACE_SPRITES.len()
                );
            }
        }

        Ok(Self {
            faces: FACE_SPRITES.to_vec(),
            back: BACK_SPRITE,
        })
    }

    /// Artwork shared by all hidden tiles.
    pub fn back(&self) -> Sprite {
        self.back
    }

    /// Artwork for a revealed face. `for_board` guarantees every face the
    /// board can produce resolves.
    pub fn face(&self, id: FaceId) -> Sprite {
        self.faces[id.index()]
    }
}

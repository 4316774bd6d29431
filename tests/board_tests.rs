//! Board tests - pairing, layout, and hit testing

use std::collections::HashMap;

use tui_memory::core::{Board, SetupError, SimpleRng};
use tui_memory::types::{Face, Point, BOARD_COLS, BOARD_ROWS, SURFACE_H, SURFACE_W};

#[test]
fn test_deal_faces_pairs_for_all_even_counts() {
    for slots in (2usize..=40).step_by(2) {
        let mut rng = SimpleRng::new(slots as u32);
        let deck = Board::deal_faces(slots, &mut rng).unwrap();
        assert_eq!(deck.len(), slots);

        let mut counts: HashMap<u8, usize> = HashMap::new();
        for face in &deck {
            *counts.entry(face.0).or_default() += 1;
        }
        assert_eq!(counts.len(), slots / 2, "slots={}", slots);
        assert!(counts.values().all(|&c| c == 2), "slots={}", slots);
    }
}

#[test]
fn test_deal_faces_requires_an_even_count() {
    let mut rng = SimpleRng::new(1);
    for slots in [1usize, 3, 15] {
        assert_eq!(
            Board::deal_faces(slots, &mut rng),
            Err(SetupError::OddSlotCount { slots })
        );
    }
    assert_eq!(Board::deal_faces(0, &mut rng), Err(SetupError::EmptyBoard));
}

#[test]
fn test_default_board_counts_and_state() {
    let board = Board::new(12345);

    assert_eq!(
        board.tile_count(),
        BOARD_ROWS as usize * (BOARD_COLS as usize - 1)
    );
    assert!(board.tiles().iter().all(|t| t.face() == Face::Hidden));
    assert!(!board.all_matched());
}

#[test]
fn test_each_face_appears_on_exactly_two_tiles() {
    let board = Board::new(9001);

    let mut counts: HashMap<u8, usize> = HashMap::new();
    for tile in board.tiles() {
        *counts.entry(tile.face_id().0).or_default() += 1;
    }
    assert!(counts.values().all(|&c| c == 2));
}

#[test]
fn test_reserved_column_stays_empty() {
    let board = Board::new(7);
    let tile_w = SURFACE_W / BOARD_COLS as u16;
    let reserved_x = board.reserved_column() as u16 * tile_w;

    // Sweep the whole reserved column; nothing is ever hit.
    for y in 0..SURFACE_H {
        for x in reserved_x..reserved_x + tile_w {
            assert_eq!(board.hit_test(Point::new(x, y)), None, "({}, {})", x, y);
        }
    }
}

#[test]
fn test_hit_test_maps_centers_back_to_indices() {
    let board = Board::new(31);
    for (i, tile) in board.tiles().iter().enumerate() {
        assert_eq!(board.hit_test(tile.rect().center()), Some(i));
    }

    assert_eq!(board.hit_test(Point::new(SURFACE_W + 5, 0)), None);
    assert_eq!(board.hit_test(Point::new(0, SURFACE_H + 5)), None);
}

#[test]
fn test_layout_is_deterministic_per_seed() {
    let a = Board::new(555);
    let b = Board::new(555);

    let ids = |board: &Board| -> Vec<u8> {
        board.tiles().iter().map(|t| t.face_id().0).collect()
    };
    assert_eq!(ids(&a), ids(&b));
}

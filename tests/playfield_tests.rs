//! Playfield tests: stage geometry, border immutability, occupancy.

use blockfall::core::Playfield;
use blockfall::host::headless::HeadlessRenderer;
use blockfall::types::{Color, PLAY_HEIGHT, PLAY_WIDTH, STAGE_HEIGHT, STAGE_SIZE, STAGE_WIDTH};

#[test]
fn test_new_stage_announces_every_cell() {
    let mut r = HeadlessRenderer::new();
    let _field = Playfield::new(&mut r);
    assert_eq!(r.cells_created, STAGE_SIZE);
}

#[test]
fn test_border_ring_is_occupied_and_interior_is_free() {
    let mut r = HeadlessRenderer::new();
    let field = Playfield::new(&mut r);

    for y in 0..STAGE_HEIGHT {
        for x in 0..STAGE_WIDTH {
            let border = x == 0 || x == STAGE_WIDTH - 1 || y == 0 || y == STAGE_HEIGHT - 1;
            assert_eq!(field.is_border((x, y)), border, "({x}, {y})");
            assert_eq!(field.is_occupied((x, y)), border, "({x}, {y})");
        }
    }
}

#[test]
fn test_out_of_bounds_is_not_a_cell() {
    let mut r = HeadlessRenderer::new();
    let field = Playfield::new(&mut r);

    assert!(!field.contains((-1, 0)));
    assert!(!field.contains((0, -1)));
    assert!(!field.contains((STAGE_WIDTH, 0)));
    assert!(!field.contains((0, STAGE_HEIGHT)));
    assert_eq!(field.cell_at((-1, 5)), None);
    assert!(!field.is_occupied((-1, 5)));
}

#[test]
fn test_border_cells_cannot_be_cleared() {
    let mut r = HeadlessRenderer::new();
    let mut field = Playfield::new(&mut r);

    field.clear(&mut r, (0, 5));
    field.clear(&mut r, (STAGE_WIDTH - 1, 5));
    field.clear(&mut r, (5, STAGE_HEIGHT - 1));
    assert!(field.is_occupied((0, 5)));
    assert!(field.is_occupied((STAGE_WIDTH - 1, 5)));
    assert!(field.is_occupied((5, STAGE_HEIGHT - 1)));
}

#[test]
fn test_active_cells_do_not_count_as_occupied() {
    let mut r = HeadlessRenderer::new();
    let mut field = Playfield::new(&mut r);

    field.set_occupied(&mut r, (3, 3), Color::RED, true);
    assert!(!field.is_occupied((3, 3)));

    field.set_active(&mut r, (3, 3), false);
    assert!(field.is_occupied((3, 3)));
}

#[test]
fn test_full_row_detection_ignores_the_border() {
    let mut r = HeadlessRenderer::new();
    let mut field = Playfield::new(&mut r);

    // Border columns alone never make a row full.
    assert!(!field.is_row_full(PLAY_HEIGHT));

    for x in 1..=PLAY_WIDTH {
        field.set_occupied(&mut r, (x, PLAY_HEIGHT), Color::GREEN, false);
    }
    assert!(field.is_row_full(PLAY_HEIGHT));

    field.clear(&mut r, (5, PLAY_HEIGHT));
    assert!(!field.is_row_full(PLAY_HEIGHT));
}

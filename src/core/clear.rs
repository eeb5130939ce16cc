//! Line-clear engine: full-row detection and gravity compaction.

use arrayvec::ArrayVec;

use crate::core::playfield::Playfield;
use crate::host::Renderer;
use crate::types::{PLAY_HEIGHT, STAGE_WIDTH};

/// Clear every full interior row and compact the rows above downward.
///
/// Scans bottom to top. After a clear, everything above drops by exactly one
/// row, so the scan resumes at the same row index (new content just landed
/// there). Returns the cleared row indices in clear order; the count feeds
/// scoring as one batch, capped at four.
pub fn clear_full_lines(field: &mut Playfield, r: &mut impl Renderer) -> ArrayVec<i8, 4> {
    let mut cleared = ArrayVec::new();
    let mut y = PLAY_HEIGHT;
    while y >= 1 {
        if field.is_row_full(y) {
            clear_row(field, r, y);
            shift_rows_down(field, r, y);
            let _ = cleared.try_push(y);
        } else {
            y -= 1;
        }
    }
    cleared
}

/// Free every interior cell of row `y`.
fn clear_row(field: &mut Playfield, r: &mut impl Renderer, y: i8) {
    for x in 1..STAGE_WIDTH - 1 {
        field.clear(r, (x, y));
    }
}

/// Drop every row strictly above `y` by one, top row last, carrying each
/// occupied cell's color and vacating the source.
fn shift_rows_down(field: &mut Playfield, r: &mut impl Renderer, y: i8) {
    for row in (1..y).rev() {
        for x in 1..STAGE_WIDTH - 1 {
            let Some(src) = field.cell_at((x, row)) else {
                continue;
            };
            if src.is_occupied() {
                field.set_occupied(r, (x, row + 1), src.color, src.active);
            } else {
                field.clear(r, (x, row + 1));
            }
            field.clear(r, (x, row));
        }
    }
}

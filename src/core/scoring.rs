//! Scoring and level/speed progression (classic rules).

use crate::types::{GRAVITY_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Score delta for one lock event clearing `lines` rows at `level`.
///
/// Simultaneous clears are rewarded more than the sum of singles; counts
/// above four score as four.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let n = lines.min(4);
    LINE_SCORES[n] * (level + 1)
}

/// Level-up check, evaluated once per lock event. The threshold is the
/// cumulative line total, so one lock can never advance more than one level.
pub fn should_level_up(total_lines: u32, level: u32) -> bool {
    total_lines >= level * LINES_PER_LEVEL
}

/// Next gravity interval after a level-up: strictly shorter until the floor,
/// never zero.
pub fn next_gravity_interval(interval_ms: u32) -> u32 {
    (interval_ms * 4 / 5).max(GRAVITY_FLOOR_MS)
}

//! Host boundary: the seams the core calls into.
//!
//! The core owns all occupancy and progression state; hosts own presentation
//! and scheduling. Every occupancy change is mirrored out through `Renderer`,
//! and gravity cadence changes go through `GravityTimer` as explicit
//! cancel-and-reschedule calls.

use crate::types::{Color, Coor};

/// Visual side of the host. Implemented by the terminal frontend and by the
/// headless host used in tests and benches.
pub trait Renderer {
    /// A stage cell exists at `coor`. Border cells start permanently occupied.
    fn create_cell(&mut self, coor: Coor, is_border: bool);

    /// Mirror one cell's state: color token, occupancy, and whether the cell
    /// currently belongs to the piece in motion.
    fn paint_cell(&mut self, coor: Coor, color: Color, occupied: bool, active: bool);

    /// Reset one cell's visuals to empty.
    fn clear_cell(&mut self, coor: Coor);

    fn update_score_display(&mut self, value: u32);
    fn update_level_display(&mut self, value: u32);
    fn update_lines_display(&mut self, value: u32);

    /// Terminal state reached; the host reveals its game-over UI.
    fn show_game_over(&mut self);
}

/// Timing side of the host: a reschedulable periodic gravity signal.
///
/// `reschedule` replaces any previous schedule (never concurrent timers);
/// `cancel` stops the signal entirely. Both are invoked from within core
/// handlers, so a well-behaved host must not fire a tick after `cancel`.
pub trait GravityTimer {
    fn reschedule(&mut self, interval_ms: u32);
    fn cancel(&mut self);
}

pub mod headless {
    //! No-I/O host used by tests and benchmarks.

    use super::{GravityTimer, Renderer};
    use crate::types::{Color, Coor};

    /// Records the display counters and the game-over signal; cell traffic
    /// is dropped since tests assert on playfield occupancy instead.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub score: u32,
        pub level: u32,
        pub lines: u32,
        pub game_over_shown: bool,
        pub cells_created: usize,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Renderer for HeadlessRenderer {
        fn create_cell(&mut self, _coor: Coor, _is_border: bool) {
            self.cells_created += 1;
        }

        fn paint_cell(&mut self, _coor: Coor, _color: Color, _occupied: bool, _active: bool) {}

        fn clear_cell(&mut self, _coor: Coor) {}

        fn update_score_display(&mut self, value: u32) {
            self.score = value;
        }

        fn update_level_display(&mut self, value: u32) {
            self.level = value;
        }

        fn update_lines_display(&mut self, value: u32) {
            self.lines = value;
        }

        fn show_game_over(&mut self) {
            self.game_over_shown = true;
        }
    }

    /// Records every schedule change so tests can assert on the curve.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessTimer {
        pub schedules: Vec<u32>,
        pub cancelled: bool,
    }

    impl HeadlessTimer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Most recent interval, if any schedule is live.
        pub fn interval_ms(&self) -> Option<u32> {
            if self.cancelled {
                None
            } else {
                self.schedules.last().copied()
            }
        }
    }

    impl GravityTimer for HeadlessTimer {
        fn reschedule(&mut self, interval_ms: u32) {
            self.schedules.push(interval_ms);
            self.cancelled = false;
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::headless::{HeadlessRenderer, HeadlessTimer};
    use super::{GravityTimer, Renderer};

    #[test]
    fn headless_renderer_tracks_displays() {
        let mut r = HeadlessRenderer::new();
        r.update_score_display(80);
        r.update_level_display(2);
        r.update_lines_display(1);
        assert_eq!((r.score, r.level, r.lines), (80, 2, 1));
        assert!(!r.game_over_shown);

        r.show_game_over();
        assert!(r.game_over_shown);
    }

    #[test]
    fn headless_timer_reschedule_clears_cancel() {
        let mut t = HeadlessTimer::new();
        assert_eq!(t.interval_ms(), None);

        t.reschedule(500);
        assert_eq!(t.interval_ms(), Some(500));

        t.cancel();
        assert_eq!(t.interval_ms(), None);

        t.reschedule(400);
        assert_eq!(t.interval_ms(), Some(400));
        assert_eq!(t.schedules, vec![500, 400]);
    }
}

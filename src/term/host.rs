//! Terminal-side implementations of the host traits.
//!
//! `TermHost` keeps a shadow copy of everything the core has asked it to
//! draw; `StageView` turns that shadow into a framebuffer each frame.
//! `LoopTimer` is the gravity schedule the main loop polls against.

use crate::host::{GravityTimer, Renderer};
use crate::types::{Color, Coor, STAGE_HEIGHT, STAGE_SIZE, STAGE_WIDTH};

/// One stage cell as last painted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageCell {
    pub color: Color,
    pub occupied: bool,
    pub active: bool,
    pub border: bool,
}

/// Shadow of the core's display state.
pub struct TermHost {
    cells: [StageCell; STAGE_SIZE],
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    dirty: bool,
}

impl TermHost {
    pub fn new() -> Self {
        Self {
            cells: [StageCell::default(); STAGE_SIZE],
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
            dirty: true,
        }
    }

    fn idx(coor: Coor) -> Option<usize> {
        let (x, y) = coor;
        if x < 0 || y < 0 || x >= STAGE_WIDTH || y >= STAGE_HEIGHT {
            return None;
        }
        Some(y as usize * STAGE_WIDTH as usize + x as usize)
    }

    pub fn cell(&self, coor: Coor) -> Option<StageCell> {
        Self::idx(coor).map(|i| self.cells[i])
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether anything changed since the last call; resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for TermHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermHost {
    fn create_cell(&mut self, coor: Coor, is_border: bool) {
        if let Some(i) = Self::idx(coor) {
            self.cells[i] = StageCell {
                color: if is_border { Color::BORDER } else { Color::TRANSPARENT },
                occupied: is_border,
                active: false,
                border: is_border,
            };
            self.dirty = true;
        }
    }

    fn paint_cell(&mut self, coor: Coor, color: Color, occupied: bool, active: bool) {
        if let Some(i) = Self::idx(coor) {
            let border = self.cells[i].border;
            self.cells[i] = StageCell {
                color,
                occupied,
                active,
                border,
            };
            self.dirty = true;
        }
    }

    fn clear_cell(&mut self, coor: Coor) {
        if let Some(i) = Self::idx(coor) {
            let border = self.cells[i].border;
            self.cells[i] = StageCell {
                color: Color::TRANSPARENT,
                occupied: false,
                active: false,
                border,
            };
            self.dirty = true;
        }
    }

    fn update_score_display(&mut self, score: u32) {
        self.score = score;
        self.dirty = true;
    }

    fn update_level_display(&mut self, level: u32) {
        self.level = level;
        self.dirty = true;
    }

    fn update_lines_display(&mut self, lines: u32) {
        self.lines = lines;
        self.dirty = true;
    }

    fn show_game_over(&mut self) {
        self.game_over = true;
        self.dirty = true;
    }
}

/// Gravity schedule polled by the main loop.
pub struct LoopTimer {
    interval_ms: Option<u32>,
}

impl LoopTimer {
    pub fn new() -> Self {
        Self { interval_ms: None }
    }

    /// Current tick interval, `None` while cancelled.
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }
}

impl Default for LoopTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl GravityTimer for LoopTimer {
    fn reschedule(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms);
    }

    fn cancel(&mut self) {
        self.interval_ms = None;
    }
}

//! Game loop state machine.
//!
//! Owns the playfield, the single piece in flight, and the progression
//! counters. Two entry points mutate it: `gravity_tick` from the host's
//! periodic timer and `apply_action` from the input boundary. Each runs to
//! completion, so the spawn/lock/clear sequence is never observable half
//! done; between handler invocations the game rests in `Falling` or
//! `GameOver`.

use crate::core::clear::clear_full_lines;
use crate::core::piece::Tetromino;
use crate::core::playfield::Playfield;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{line_clear_score, next_gravity_interval, should_level_up};
use crate::host::{GravityTimer, Renderer};
use crate::types::{Coor, GameAction, RotationDir, DOWN, GRAVITY_START_MS, LEFT, RIGHT, SPAWN_ORIGIN};

/// Resting state between handler invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// One game session.
pub struct Game<R: Renderer, T: GravityTimer> {
    field: Playfield,
    active: Option<Tetromino>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    gravity_interval_ms: u32,
    phase: Phase,
    renderer: R,
    timer: T,
}

impl<R: Renderer, T: GravityTimer> Game<R, T> {
    /// Build the stage and zero the displays. No piece is in flight and the
    /// gravity timer is idle until `start`.
    pub fn new(seed: u32, mut renderer: R, timer: T) -> Self {
        let field = Playfield::new(&mut renderer);
        let level = 1;
        renderer.update_score_display(0);
        renderer.update_level_display(level);
        renderer.update_lines_display(0);
        Self {
            field,
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level,
            lines: 0,
            gravity_interval_ms: GRAVITY_START_MS,
            phase: Phase::Falling,
            renderer,
            timer,
        }
    }

    /// Schedule gravity and spawn the first piece.
    pub fn start(&mut self) {
        if self.active.is_some() || self.phase == Phase::GameOver {
            return;
        }
        self.timer.reschedule(self.gravity_interval_ms);
        self.spawn_next();
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

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Periodic gravity signal: try one row down, lock on failure.
    pub fn gravity_tick(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let moved = match self.active.as_mut() {
            Some(piece) => piece.shift(&mut self.field, &mut self.renderer, DOWN),
            None => return,
        };
        if !moved {
            self.lock_active();
        }
    }

    /// Route one player action. Returns whether anything changed; illegal
    /// moves and anything after game over are no-ops.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.shift_active(LEFT),
            GameAction::MoveRight => self.shift_active(RIGHT),
            GameAction::SoftDrop => self.shift_active(DOWN),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_active(RotationDir::Cw),
            GameAction::RotateCcw => self.rotate_active(RotationDir::Ccw),
        }
    }

    fn shift_active(&mut self, offset: Coor) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.shift(&mut self.field, &mut self.renderer, offset),
            None => false,
        }
    }

    fn rotate_active(&mut self, dir: RotationDir) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.rotate(&mut self.field, &mut self.renderer, dir),
            None => false,
        }
    }

    /// Drop to the resting position and lock there, through the same
    /// locking path a failed gravity move takes.
    fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        while self.shift_active(DOWN) {}
        self.lock_active();
        true
    }

    /// Locking: settle the piece, clear lines, update score/level, spawn.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        piece.lock(&mut self.field, &mut self.renderer);

        let cleared = clear_full_lines(&mut self.field, &mut self.renderer);
        self.apply_clear(cleared.len());

        self.spawn_next();
    }

    /// Scoring & level controller for one lock event's batch.
    fn apply_clear(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }
        // Score with the level in effect when the piece locked.
        self.score += line_clear_score(cleared, self.level);
        self.lines += cleared as u32;
        self.renderer.update_score_display(self.score);
        self.renderer.update_lines_display(self.lines);

        if should_level_up(self.lines, self.level) {
            self.level += 1;
            self.gravity_interval_ms = next_gravity_interval(self.gravity_interval_ms);
            self.renderer.update_level_display(self.level);
            // Change of cadence is cancel-then-reschedule, never two timers.
            self.timer.cancel();
            self.timer.reschedule(self.gravity_interval_ms);
        }
    }

    /// Spawning: a fresh uniform-random piece at the standard origin. A
    /// blocked spawn is the sole fatal condition.
    fn spawn_next(&mut self) {
        let mut piece = Tetromino::new(self.rng.random_kind());
        if piece.spawn(&mut self.field, &mut self.renderer, SPAWN_ORIGIN) {
            self.active = Some(piece);
        } else {
            self.enter_game_over();
        }
    }

    /// Terminal: stop the gravity signal and reveal the game-over UI. Input
    /// and further ticks are ignored from here on.
    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.timer.cancel();
        self.renderer.show_game_over();
    }
}

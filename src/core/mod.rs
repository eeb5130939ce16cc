//! Deterministic game core: playfield, pieces, collision, line clears,
//! scoring, and the game state machine. No I/O; all host effects go through
//! the `host` traits.

pub mod clear;
pub mod collision;
pub mod game;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod scoring;

pub use clear::clear_full_lines;
pub use collision::can_place;
pub use game::{Game, Phase};
pub use piece::{shape_def, Tetromino};
pub use playfield::{Cell, CellStatus, Playfield};
pub use rng::SimpleRng;
pub use scoring::{line_clear_score, next_gravity_interval, should_level_up};

//! Falling-block puzzle engine with a terminal frontend.
//!
//! `core` holds the deterministic game logic, `host` the traits it drives
//! its outputs through, `input` the key mapping, and `term` the crossterm
//! implementation of the host side.

pub mod core;
pub mod host;
pub mod input;
pub mod term;
pub mod types;

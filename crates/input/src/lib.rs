//! Terminal input module (display-facing).
//!
//! This module is intentionally independent of the animation core. It maps
//! `crossterm` key events onto [`crate::types::Key`], decides which keys end
//! the program, and drains pending terminal events without blocking.

pub mod map;
pub mod pump;

pub use starfield_types as types;

pub use map::{map_key, should_quit};
pub use pump::{EventPump, Polled};

//! Terminal display module.
//!
//! This is a small, game-oriented rendering layer for terminal animation.
//! It avoids any widget/layout toolkit and instead renders into a simple
//! framebuffer that is flushed to the terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal I/O
//! - Redraw only the cells that changed since the previous tick
//! - Never let a terminal error interrupt the animation

pub mod display;
pub mod fb;
pub mod renderer;

pub use starfield_core as core;
pub use starfield_input as input;
pub use starfield_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

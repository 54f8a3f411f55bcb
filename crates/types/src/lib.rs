//! Shared types module - plain data structures and constants
//!
//! This module defines the fundamental types passed between the animation
//! core, the input mapping and the terminal display. All types are pure data
//! with no external dependencies, so they can be used from any layer.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Scheduler tick interval (10 frames per second) |
//! | `BLINK_MIN_TICKS` | 10 | Shortest time a star holds one brightness |
//! | `BLINK_MAX_TICKS` | 50 | Longest time a star holds one brightness |
//! | `SPACESHIP_FRAME_TICKS` | 2 | Ticks each spaceship frame stays on screen |
//!
//! # Examples
//!
//! ```
//! use starfield_types::{Attribute, Intent, Key, Position};
//!
//! assert_eq!(Attribute::default(), Attribute::Normal);
//!
//! // The neutral intent is the default
//! assert_eq!(Intent::default(), Intent::NEUTRAL);
//!
//! // Positions round half away from zero
//! assert_eq!(Position::new(2.5, -0.5).rounded(), (3, -1));
//!
//! assert_ne!(Key::Up, Key::Char('k'));
//! ```

/// Scheduler tick interval in milliseconds (100ms = 10 ticks per second)
pub const TICK_MS: u32 = 100;

/// Number of star blinkers seeded at startup
pub const STAR_COUNT: usize = 100;

/// Symbols a star may be drawn with
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Shortest duration of one blink phase, in ticks (inclusive)
pub const BLINK_MIN_TICKS: u32 = 10;

/// Longest duration of one blink phase, in ticks (inclusive)
pub const BLINK_MAX_TICKS: u32 = 50;

/// Spaceship movement per tick, in cells
pub const SPACESHIP_SPEED: f64 = 5.0;

/// Ticks each spaceship animation frame is held before switching
pub const SPACESHIP_FRAME_TICKS: u32 = 2;

/// Row speed of the baseline projectile (cells per tick, negative = upward)
pub const PROJECTILE_ROW_SPEED: f64 = -0.5;

/// Column speed of the baseline projectile
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

/// Symbol drawn on the first projectile step
pub const MUZZLE_SYMBOL: char = '*';

/// Symbol drawn on the second projectile step
pub const FLASH_SYMBOL: char = 'O';

/// Width of the display border, in cells
pub const BORDER: f64 = 1.0;


/// Visual attribute of a character cell
///
/// Mirrors the three intensities a terminal can show reliably:
/// - **Normal**: default intensity
/// - **Dim**: faint
/// - **Bold**: bright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attribute {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// A key as seen by the animation core
///
/// Terminal backends translate their own events into this shape. The core
/// decides which keys mean something; everything else arrives as
/// `Char(_)` or `Other` and is ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// Resolved directional and fire input for one tick
///
/// `row_direction` and `column_direction` are always one of -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub row_direction: i8,
    pub column_direction: i8,
    pub fire: bool,
}

impl Intent {
    /// No movement, no fire.
    pub const NEUTRAL: Intent = Intent {
        row_direction: 0,
        column_direction: 0,
        fire: false,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// A real-valued cell position
///
/// Animation state is kept in fractional cells; it is rounded to the
/// nearest integer cell only when something is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub const fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// Nearest integer cell (half away from zero).
    pub fn rounded(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    pub fn offset(&self, row_delta: f64, column_delta: f64) -> Self {
        Self {
            row: self.row + row_delta,
            column: self.column + column_delta,
        }
    }
}

/// Lifecycle of a task after one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task wants to be stepped again next tick.
    Running,
    /// The task is done and must be removed.
    Finished,
}

impl TaskStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, TaskStatus::Finished)
    }
}

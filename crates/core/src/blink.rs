//! Star blinker: one cell cycling through four brightness phases forever.

use crate::rng::SimpleRng;
use crate::task::{Task, TickContext};
use crate::types::{Attribute, TaskStatus, BLINK_MAX_TICKS, BLINK_MIN_TICKS};

/// Blink phases in their fixed cyclic order.
///
/// `Rising` and `Falling` both render as [`Attribute::Normal`]; they are
/// distinct so that `Dim` is always followed by `Bold` via a normal phase
/// and never directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    Dim,
    Rising,
    Bold,
    Falling,
}

impl BlinkPhase {
    pub fn next(self) -> Self {
        match self {
            BlinkPhase::Dim => BlinkPhase::Rising,
            BlinkPhase::Rising => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Falling,
            BlinkPhase::Falling => BlinkPhase::Dim,
        }
    }

    pub fn attribute(self) -> Attribute {
        match self {
            BlinkPhase::Dim => Attribute::Dim,
            BlinkPhase::Rising | BlinkPhase::Falling => Attribute::Normal,
            BlinkPhase::Bold => Attribute::Bold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Blink {
    row: i32,
    column: i32,
    symbol: char,
    phase: BlinkPhase,
    remaining: u32,
    rng: SimpleRng,
}

impl Blink {
    pub fn new(row: i32, column: i32, symbol: char, mut rng: SimpleRng) -> Self {
        let remaining = rng.range_inclusive(BLINK_MIN_TICKS, BLINK_MAX_TICKS);
        Self {
            row,
            column,
            symbol,
            phase: BlinkPhase::Dim,
            remaining,
            rng,
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }
}

impl Task for Blink {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        ctx.display
            .place(self.row, self.column, self.symbol, self.phase.attribute());

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = self.phase.next();
            self.remaining = self.rng.range_inclusive(BLINK_MIN_TICKS, BLINK_MAX_TICKS);
        }
        TaskStatus::Running
    }

    fn name(&self) -> &'static str {
        "blink"
    }
}

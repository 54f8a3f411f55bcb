//! Task abstraction: one animation advanced one step per scheduler tick.
//!
//! A task keeps all of its progress in its own fields and yields back to the
//! scheduler after each unit of visible work. The only things it shares with
//! other tasks are the display and the tick's read-only [`Intent`].

use crate::display::{Display, Playfield};
use crate::types::{Intent, TaskStatus};

/// An animation state machine.
pub trait Task {
    /// Advance by exactly one step. Must not panic; out-of-range drawing is
    /// absorbed by the display.
    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Everything a task may touch during one step.
pub struct TickContext<'a> {
    pub display: &'a mut dyn Display,
    pub playfield: Playfield,
    pub intent: Intent,
    pub tick: u64,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        display: &'a mut dyn Display,
        playfield: Playfield,
        intent: Intent,
        tick: u64,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            display,
            playfield,
            intent,
            tick,
            spawned,
        }
    }

    /// Queue a new task. It is first stepped on the next tick.
    pub fn spawn(&mut self, task: Box<dyn Task>) {
        self.spawned.push(task);
    }
}

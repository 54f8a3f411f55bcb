//! Cooperative tick scheduler.
//!
//! One thread, one display, many tasks. Each tick the scheduler resolves the
//! pending input into an [`Intent`](crate::types::Intent), steps every alive
//! task once in insertion order, drops the ones that finished, commits one
//! redraw and sleeps for whatever is left of the tick interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::display::{Display, Playfield};
use crate::input::read_controls;
use crate::task::{Task, TickContext};

/// Host-provided stop request, checked between ticks.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    spawned: Vec<Box<dyn Task>>,
    tick_interval: Duration,
    ticks: u64,
}

impl Scheduler {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tasks: Vec::new(),
            spawned: Vec::new(),
            tick_interval,
            ticks: 0,
        }
    }

    /// Append a task; it runs after every task added before it.
    pub fn spawn(&mut self, task: Box<dyn Task>) {
        debug!(task = task.name(), "spawned");
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Names of the alive tasks in stepping order.
    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Run one tick without pacing. Returns the number of alive tasks.
    pub fn tick(&mut self, display: &mut dyn Display) -> usize {
        let intent = read_controls(display);
        let playfield = Playfield::of(display);
        let tick = self.ticks;

        {
            let mut ctx = TickContext::new(display, playfield, intent, tick, &mut self.spawned);
            self.tasks.retain_mut(|task| {
                let alive = !task.step(&mut ctx).is_finished();
                if !alive {
                    debug!(task = task.name(), tick, "finished");
                }
                alive
            });
        }

        for task in std::mem::take(&mut self.spawned) {
            self.spawn(task);
        }

        display.commit();
        self.ticks += 1;
        trace!(tick, alive = self.tasks.len(), "tick");
        self.tasks.len()
    }

    /// Tick until every task has finished or `stop` is requested.
    pub fn run(&mut self, display: &mut dyn Display, stop: &StopSignal) {
        info!(
            tasks = self.tasks.len(),
            interval_ms = self.tick_interval.as_millis() as u64,
            "scheduler started"
        );

        while !self.tasks.is_empty() && !stop.is_requested() {
            let started = Instant::now();
            self.tick(display);

            if let Some(rest) = self.tick_interval.checked_sub(started.elapsed()) {
                if !rest.is_zero() {
                    thread::sleep(rest);
                }
            }
        }

        info!(ticks = self.ticks, alive = self.tasks.len(), "scheduler stopped");
    }
}

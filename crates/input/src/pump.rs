//! Non-blocking event pump over the terminal event queue.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key, should_quit};
use crate::types::Key;

/// Result of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    Key(Key),
    Quit,
    Empty,
}

/// Where raw terminal events come from.
pub trait EventSource {
    /// Next pending event, or `None` without waiting.
    fn try_next(&mut self) -> Result<Option<Event>>;
}

/// Reads the process terminal through `crossterm`.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn try_next(&mut self) -> Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Turns raw events into core keys.
///
/// Press and repeat events are both delivered so a held key keeps steering;
/// release events and non-key events are skipped.
#[derive(Debug, Default)]
pub struct EventPump<S = TerminalEvents> {
    source: S,
}

impl EventPump<TerminalEvents> {
    pub fn terminal() -> Self {
        Self {
            source: TerminalEvents,
        }
    }
}

impl<S: EventSource> EventPump<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Next meaningful input, skipping events that carry none.
    pub fn poll(&mut self) -> Result<Polled> {
        while let Some(ev) = self.source.try_next()? {
            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if should_quit(key) {
                return Ok(Polled::Quit);
            }
            return Ok(Polled::Key(map_key(key)));
        }
        Ok(Polled::Empty)
    }
}

//! Input decoder: folds every key queued since the last tick into one [`Intent`].

use crate::display::Display;
use crate::types::{Intent, Key};

/// What a single key means, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Row(i8),
    Column(i8),
    Fire,
}

/// Map one key to a control. Unrecognized keys yield `None`.
pub fn control_for(key: Key) -> Option<Control> {
    match key {
        Key::Up | Key::Char('w' | 'W' | 'k' | 'K') => Some(Control::Row(-1)),
        Key::Down | Key::Char('s' | 'S' | 'j' | 'J') => Some(Control::Row(1)),
        Key::Left | Key::Char('a' | 'A' | 'h' | 'H') => Some(Control::Column(-1)),
        Key::Right | Key::Char('d' | 'D' | 'l' | 'L') => Some(Control::Column(1)),
        Key::Char(' ') => Some(Control::Fire),
        _ => None,
    }
}

/// Resolve a batch of keys: last write per axis wins, fire is sticky.
pub fn resolve<I>(keys: I) -> Intent
where
    I: IntoIterator<Item = Key>,
{
    let mut intent = Intent::NEUTRAL;
    for key in keys {
        match control_for(key) {
            Some(Control::Row(d)) => intent.row_direction = d,
            Some(Control::Column(d)) => intent.column_direction = d,
            Some(Control::Fire) => intent.fire = true,
            None => {}
        }
    }
    intent
}

/// Drain the display's input queue and resolve it.
///
/// Returns [`Intent::NEUTRAL`] immediately when nothing is pending.
pub fn read_controls(display: &mut dyn Display) -> Intent {
    resolve(std::iter::from_fn(|| display.poll_input()))
}

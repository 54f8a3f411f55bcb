//! `TerminalDisplay`: the real [`Display`] behind the animation core.
//!
//! Tasks draw into a persistent back buffer; `commit` hands that buffer to
//! the renderer, which writes only what changed since the previous commit.
//! Terminal I/O errors never reach the tasks: they are logged and the frame
//! is skipped.

use anyhow::Result;
use tracing::warn;

use crate::core::{Display, StopSignal};
use crate::fb::{CellStyle, FrameBuffer};
use crate::input::{EventPump, Polled};
use crate::renderer::TerminalRenderer;
use crate::types::{Attribute, Key};

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    back: FrameBuffer,
    pump: EventPump,
    stop: StopSignal,
    rows: u16,
    columns: u16,
}

impl TerminalDisplay {
    /// Size the display to the current terminal and draw the border.
    ///
    /// The size is fixed from here on.
    pub fn new(renderer: TerminalRenderer, stop: StopSignal) -> Result<Self> {
        let (rows, columns) = renderer.size()?;
        let mut back = FrameBuffer::new(columns, rows);
        back.draw_border();
        Ok(Self {
            renderer,
            back,
            pump: EventPump::terminal(),
            stop,
            rows,
            columns,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Display for TerminalDisplay {
    fn place(&mut self, row: i32, col: i32, symbol: char, attribute: Attribute) {
        let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        self.back
            .put_char(x, y, symbol, CellStyle::for_attribute(attribute));
    }

    fn commit(&mut self) {
        // A ship clipped at an edge may have blanked border cells.
        self.back.draw_border();
        if let Err(err) = self.renderer.draw(&self.back) {
            warn!(error = %err, "frame skipped");
            self.renderer.invalidate();
        }
    }

    fn bounds(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn poll_input(&mut self) -> Option<Key> {
        match self.pump.poll() {
            Ok(Polled::Key(key)) => Some(key),
            Ok(Polled::Quit) => {
                self.stop.request();
                None
            }
            Ok(Polled::Empty) => None,
            Err(err) => {
                warn!(error = %err, "input poll failed");
                None
            }
        }
    }

    fn alert(&mut self) {
        if let Err(err) = self.renderer.bell() {
            warn!(error = %err, "bell failed");
        }
    }
}

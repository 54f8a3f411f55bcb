//! Display capability consumed by the animation core.
//!
//! The core never talks to a terminal directly. Everything it draws, every
//! key it reads and every alert it raises goes through [`Display`], so the
//! same tasks run against a real terminal or against [`MemoryDisplay`] in
//! tests.

use std::collections::VecDeque;

use crate::types::{Attribute, Key};

/// Character-cell surface with bounded rows and columns.
///
/// Implementations must never fail: drawing outside the extent is a silent
/// no-op and input polling returns immediately.
pub trait Display {
    /// Write one cell. No-op if `(row, col)` is outside the extent.
    fn place(&mut self, row: i32, col: i32, symbol: char, attribute: Attribute);

    /// Blank one cell.
    fn clear(&mut self, row: i32, col: i32) {
        self.place(row, col, ' ', Attribute::Normal);
    }

    /// Flush all pending cell writes to the visible surface.
    fn commit(&mut self);

    /// `(rows, cols)`, fixed for the run.
    fn bounds(&self) -> (u16, u16);

    /// Next pending key, or `None` when the queue is empty. Never blocks.
    fn poll_input(&mut self) -> Option<Key>;

    /// Best-effort audible or visual notification.
    fn alert(&mut self);
}

/// Drawable area derived from the display extent.
///
/// `max_row`/`max_column` are the border row and column; the playfield
/// interior is strictly between 0 and those values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub rows: i32,
    pub columns: i32,
    pub max_row: i32,
    pub max_column: i32,
}

impl Playfield {
    pub fn new(rows: u16, columns: u16) -> Self {
        let rows = rows as i32;
        let columns = columns as i32;
        Self {
            rows,
            columns,
            max_row: rows - 1,
            max_column: columns - 1,
        }
    }

    pub fn of(display: &dyn Display) -> Self {
        let (rows, columns) = display.bounds();
        Self::new(rows, columns)
    }

    /// Inside the display extent (border included).
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.rows && col < self.columns
    }

    /// Strictly inside the border: touching the border counts as outside.
    #[inline]
    pub fn contains_strictly(&self, row: i32, col: i32) -> bool {
        0 < row && row < self.max_row && 0 < col && col < self.max_column
    }
}

/// A single cell of a [`MemoryDisplay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCell {
    pub symbol: char,
    pub attribute: Attribute,
}

impl Default for MemoryCell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            attribute: Attribute::Normal,
        }
    }
}

/// In-memory display for tests, benches and headless runs.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    rows: u16,
    columns: u16,
    cells: Vec<MemoryCell>,
    keys: VecDeque<Key>,
    commits: u64,
    alerts: u64,
}

impl MemoryDisplay {
    pub fn new(rows: u16, columns: u16) -> Self {
        let len = (rows as usize) * (columns as usize);
        Self {
            rows,
            columns,
            cells: vec![MemoryCell::default(); len],
            keys: VecDeque::new(),
            commits: 0,
            alerts: 0,
        }
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.columns as i32 {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<MemoryCell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// Symbol at a cell, `None` outside the extent.
    pub fn symbol(&self, row: i32, col: i32) -> Option<char> {
        self.get(row, col).map(|c| c.symbol)
    }

    pub fn cells(&self) -> &[MemoryCell] {
        &self.cells
    }

    /// Queue a key for a later `poll_input`.
    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn alerts(&self) -> u64 {
        self.alerts
    }

    /// All `(row, col)` cells currently holding `symbol`.
    pub fn find(&self, symbol: char) -> Vec<(i32, i32)> {
        let columns = self.columns as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == symbol)
            .map(|(i, _)| ((i / columns) as i32, (i % columns) as i32))
            .collect()
    }

    /// One row as a string, for assertions.
    pub fn row_text(&self, row: i32) -> String {
        (0..self.columns as i32)
            .filter_map(|col| self.symbol(row, col))
            .collect()
    }
}

impl Display for MemoryDisplay {
    fn place(&mut self, row: i32, col: i32, symbol: char, attribute: Attribute) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = MemoryCell { symbol, attribute };
        }
    }

    fn commit(&mut self) {
        self.commits += 1;
    }

    fn bounds(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn poll_input(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    fn alert(&mut self) {
        self.alerts += 1;
    }
}

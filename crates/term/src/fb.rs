//! Framebuffer and style types for terminal rendering.

use crate::types::Attribute;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const FOREGROUND: Rgb = Rgb::new(220, 220, 220);
const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BORDER: Rgb = Rgb::new(90, 110, 160);

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub fn for_attribute(attribute: Attribute) -> Self {
        Self {
            bold: attribute == Attribute::Bold,
            dim: attribute == Attribute::Dim,
            ..Self::default()
        }
    }

    pub fn border() -> Self {
        Self {
            fg: BORDER,
            ..Self::default()
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: FOREGROUND,
            bg: BACKGROUND,
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Outline the outermost rows and columns with a box.
    pub fn draw_border(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let style = CellStyle::border();
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 1..right {
            self.put_char(x, 0, '─', style);
            self.put_char(x, bottom, '─', style);
        }
        for y in 1..bottom {
            self.put_char(0, y, '│', style);
            self.put_char(right, y, '│', style);
        }
        self.put_char(0, 0, '┌', style);
        self.put_char(right, 0, '┐', style);
        self.put_char(0, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'x', CellStyle::default());
        fb.put_char(0, 2, 'x', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn border_corners_and_edges() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_border();
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(3, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 2).unwrap().ch, '└');
        assert_eq!(fb.get(3, 2).unwrap().ch, '┘');
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
        assert_eq!(fb.get(0, 1).unwrap().ch, '│');
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn attribute_maps_to_intensity() {
        assert!(CellStyle::for_attribute(Attribute::Bold).bold);
        assert!(CellStyle::for_attribute(Attribute::Dim).dim);
        assert_eq!(CellStyle::for_attribute(Attribute::Normal), CellStyle::default());
    }
}

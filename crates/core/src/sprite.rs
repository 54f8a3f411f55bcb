//! Multi-row text sprites and frame animations.
//!
//! A sprite is a block of text where every non-space character is a pixel.
//! Spaces are transparent: they are neither drawn nor erased, so a sprite
//! never wipes a neighbour's cell.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::display::Display;
use crate::types::Attribute;

/// Sprite loading errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {} has no visible cells", path.display())]
    Empty { path: PathBuf },
}

/// Immutable text glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<Vec<char>>,
}

impl Sprite {
    /// Build a sprite from text. Trailing `\r` is dropped from each line.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        Self { lines }
    }

    /// Read a sprite file. Missing, unreadable or blank files are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let sprite = Self::parse(&text);
        if sprite.is_blank() {
            return Err(AssetError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(sprite)
    }

    /// `(rows, columns)`: number of lines and the widest line.
    pub fn size(&self) -> (usize, usize) {
        let columns = self.lines.iter().map(Vec::len).max().unwrap_or(0);
        (self.lines.len(), columns)
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().flatten().all(|&ch| ch == ' ')
    }

    pub fn stamp(&self, display: &mut dyn Display, row: f64, column: f64) {
        self.draw(display, row, column, false);
    }

    pub fn erase(&self, display: &mut dyn Display, row: f64, column: f64) {
        self.draw(display, row, column, true);
    }

    /// Draw the sprite with its top-left corner at the rounded origin.
    ///
    /// With `negative` every opaque pixel is blanked instead, which is the
    /// exact inverse of a plain draw at the same origin.
    pub fn draw(&self, display: &mut dyn Display, row: f64, column: f64, negative: bool) {
        let (rows, columns) = display.bounds();
        let (rows, columns) = (rows as i32, columns as i32);
        let origin_row = row.round() as i32;
        let origin_column = column.round() as i32;

        for (dr, line) in self.lines.iter().enumerate() {
            let r = origin_row + dr as i32;
            if r < 0 {
                continue;
            }
            if r >= rows {
                break;
            }
            for (dc, &ch) in line.iter().enumerate() {
                let c = origin_column + dc as i32;
                if c < 0 {
                    continue;
                }
                if c >= columns {
                    break;
                }
                if ch == ' ' {
                    continue;
                }
                let symbol = if negative { ' ' } else { ch };
                display.place(r, c, symbol, Attribute::Normal);
            }
        }
    }
}

/// A cycle of sprite frames, each held for a fixed number of ticks.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Sprite>,
    ticks_per_frame: u32,
}

impl Animation {
    /// `frames` must not be empty; `ticks_per_frame` of 0 is treated as 1.
    pub fn new(frames: Vec<Sprite>, ticks_per_frame: u32) -> Self {
        Self {
            frames,
            ticks_per_frame: ticks_per_frame.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the frame shown on the given tick.
    pub fn index_at(&self, tick: u64) -> usize {
        if self.frames.is_empty() {
            return 0;
        }
        ((tick / self.ticks_per_frame as u64) % self.frames.len() as u64) as usize
    }

    pub fn frame(&self, index: usize) -> Option<&Sprite> {
        self.frames.get(index)
    }

    /// Largest `(rows, columns)` over all frames.
    pub fn size(&self) -> (usize, usize) {
        self.frames.iter().map(Sprite::size).fold((0, 0), |(r, c), (fr, fc)| {
            (r.max(fr), c.max(fc))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemoryDisplay;

    const ROCKET: &str = "  .  \n .'. \n |o| \n.'o'.\n|.-.|\n'   '\n";

    #[test]
    fn size_is_line_count_and_widest_line() {
        let s = Sprite::parse("ab\nabcd\n\na");
        assert_eq!(s.size(), (4, 4));
    }

    #[test]
    fn stamp_skips_transparent_cells() {
        let mut d = MemoryDisplay::new(10, 10);
        d.place(1, 1, '#', Attribute::Normal);
        Sprite::parse(" x\nx ").stamp(&mut d, 1.0, 1.0);

        assert_eq!(d.symbol(1, 1), Some('#'));
        assert_eq!(d.symbol(1, 2), Some('x'));
        assert_eq!(d.symbol(2, 1), Some('x'));
    }

    #[test]
    fn stamp_then_erase_restores_blank_cells() {
        let mut d = MemoryDisplay::new(12, 12);
        d.place(3, 2, '#', Attribute::Bold);
        let before = d.cells().to_vec();

        let s = Sprite::parse(ROCKET);
        s.stamp(&mut d, 2.4, 1.6);
        assert_ne!(d.cells(), before.as_slice());
        s.erase(&mut d, 2.4, 1.6);

        // (3,2) sits under a transparent pixel of the second row.
        assert_eq!(d.get(3, 2).unwrap().symbol, '#');
        assert_eq!(d.cells(), before.as_slice());
    }

    #[test]
    fn partially_offscreen_sprite_is_clipped() {
        let mut d = MemoryDisplay::new(4, 4);
        let s = Sprite::parse("abc\ndef\nghi");
        s.stamp(&mut d, -1.0, 2.0);

        assert_eq!(d.row_text(0), "  de");
        assert_eq!(d.row_text(1), "  gh");
        assert_eq!(d.row_text(2), "    ");
    }

    #[test]
    fn origin_is_rounded() {
        let mut d = MemoryDisplay::new(5, 5);
        Sprite::parse("x").stamp(&mut d, 1.5, 2.49);
        assert_eq!(d.find('x'), vec![(2, 2)]);
    }

    #[test]
    fn load_missing_file_is_asset_error() {
        let err = Sprite::load("/definitely/not/here/rocket.txt").unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }

    #[test]
    fn animation_holds_each_frame() {
        let a = Animation::new(vec![Sprite::parse("a"), Sprite::parse("bb")], 2);
        let seq: Vec<usize> = (0..8).map(|t| a.index_at(t)).collect();
        assert_eq!(seq, vec![0, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(a.size(), (1, 2));
    }
}

#![forbid(unsafe_code)]

//! Glyph grid: the 2D surface shared by operators and the guide renderer.
//!
//! The grid has three layers that never bleed into each other:
//!
//! - **Glyphs**: the automaton program, one `char` per cell. [`EMPTY_GLYPH`]
//!   marks an empty cell.
//! - **Locks**: per-tick "already interpreted" markers. Operators append to this
//!   set while scanning; the host clears it at the start of each tick.
//! - **Overlay**: render-only text drawn by [`GlyphGrid::write`]. Writing text
//!   never changes the program.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::geometry::{Point, Size};
use crate::style::StyleTag;
use crate::text::truncate_to_width;

/// Glyph stored in an empty cell. Out-of-bounds reads also return this.
pub const EMPTY_GLYPH: char = '.';

/// The "bang" glyph that activates passive neighbors.
pub const TRIGGER_GLYPH: char = '*';

/// Read/lock/write access to a glyph grid.
///
/// Implementations must treat out-of-bounds coordinates as empty on read and
/// ignore them on lock and write.
pub trait GlyphGrid {
    /// Grid dimensions.
    fn size(&self) -> Size;

    /// Glyph at `p`, or [`EMPTY_GLYPH`] when `p` is outside the grid.
    fn glyph_at(&self, p: Point) -> char;

    /// Mark `p` as consumed for the current tick. Idempotent.
    fn lock(&mut self, p: Point);

    /// Whether `p` was consumed during the current tick.
    fn is_locked(&self, p: Point) -> bool;

    /// Drop every lock. The host calls this at the start of each tick.
    fn clear_locks(&mut self);

    /// Draw `text` onto the overlay starting at `p`, at most `max_width`
    /// cells wide.
    fn write(&mut self, text: &str, p: Point, max_width: usize, style: StyleTag);

    /// Whether `p` lies inside the grid.
    fn in_bounds(&self, p: Point) -> bool {
        self.size().contains(p)
    }

    /// Whether any orthogonal neighbor of `p` holds `glyph`.
    fn has_neighbor(&self, p: Point, glyph: char) -> bool {
        p.orthogonal_neighbors()
            .any(|n| self.in_bounds(n) && self.glyph_at(n) == glyph)
    }

    /// Whether a [`TRIGGER_GLYPH`] sits next to `p`.
    fn has_trigger_neighbor(&self, p: Point) -> bool {
        self.has_neighbor(p, TRIGGER_GLYPH)
    }
}

/// One cell of the render overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayCell {
    Glyph { ch: char, style: StyleTag },
    /// Trailing half of a wide glyph.
    Continuation,
}

/// In-memory [`GlyphGrid`].
///
/// Cells are stored in row-major order in flat vectors, one per layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBuffer {
    glyphs: Vec<char>,
    locks: Vec<bool>,
    overlay: Vec<Option<OverlayCell>>,
    size: Size,
}

impl GlyphBuffer {
    /// Create a grid filled with [`EMPTY_GLYPH`].
    pub fn new(width: u16, height: u16) -> Self {
        let size = Size::new(width, height);
        let len = size.area();
        Self {
            glyphs: vec![EMPTY_GLYPH; len],
            locks: vec![false; len],
            overlay: vec![None; len],
            size,
        }
    }

    /// Build a grid from newline-separated rows.
    ///
    /// The width is the longest row; shorter rows are padded with
    /// [`EMPTY_GLYPH`]. Rows and columns past `u16::MAX` are dropped.
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<&str> = text.lines().take(u16::MAX as usize).collect();
        let width = rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;
        let mut grid = Self::new(width, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                grid.set_glyph(Point::new(x as u16, y as u16), ch);
            }
        }
        grid
    }

    /// Grid width.
    pub fn width(&self) -> u16 {
        self.size.width
    }

    /// Grid height.
    pub fn height(&self) -> u16 {
        self.size.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.size.contains(p) {
            Some(p.y as usize * self.size.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Place a glyph. Returns `false` if `p` is out of bounds.
    pub fn set_glyph(&mut self, p: Point, glyph: char) -> bool {
        match self.index(p) {
            Some(idx) => {
                self.glyphs[idx] = glyph;
                true
            }
            None => false,
        }
    }

    /// Place each char of `text` left-to-right starting at `p`.
    ///
    /// Characters that fall outside the grid are dropped.
    pub fn set_glyphs(&mut self, p: Point, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            let Some(x) = u16::try_from(i).ok().and_then(|i| p.x.checked_add(i)) else {
                break;
            };
            if !self.set_glyph(Point::new(x, p.y), ch) {
                break;
            }
        }
    }

    /// Number of cells locked this tick.
    pub fn locked_count(&self) -> usize {
        self.locks.iter().filter(|l| **l).count()
    }

    /// Locked coordinates in row-major order.
    pub fn locked_cells(&self) -> Vec<Point> {
        let width = self.size.width as usize;
        self.locks
            .iter()
            .enumerate()
            .filter(|(_, l)| **l)
            .map(|(idx, _)| Point::new((idx % width) as u16, (idx / width) as u16))
            .collect()
    }

    /// Erase the render overlay.
    pub fn clear_overlay(&mut self) {
        self.overlay.fill(None);
    }

    /// Overlay glyph and style at `p`, if any text was written there.
    pub fn overlay_at(&self, p: Point) -> Option<(char, StyleTag)> {
        match self.overlay[self.index(p)?] {
            Some(OverlayCell::Glyph { ch, style }) => Some((ch, style)),
            _ => None,
        }
    }

    /// Read back `len` overlay cells starting at `p` as a string.
    ///
    /// Cells without overlay text read as spaces.
    pub fn overlay_text(&self, p: Point, len: u16) -> String {
        let mut out = String::new();
        for dx in 0..len {
            let Some(x) = p.x.checked_add(dx) else { break };
            let Some(idx) = self.index(Point::new(x, p.y)) else {
                break;
            };
            match self.overlay[idx] {
                Some(OverlayCell::Glyph { ch, .. }) => out.push(ch),
                Some(OverlayCell::Continuation) => {}
                None => out.push(' '),
            }
        }
        out
    }

    /// Program rows as strings, without overlay.
    pub fn rows(&self) -> Vec<String> {
        self.glyphs
            .chunks(self.size.width.max(1) as usize)
            .take(self.size.height as usize)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Composite rows: overlay text drawn on top of the program.
    pub fn render_lines(&self) -> Vec<String> {
        let width = self.size.width as usize;
        (0..self.size.height as usize)
            .map(|y| {
                let start = y * width;
                let mut line = String::with_capacity(width);
                for idx in start..start + width {
                    match self.overlay[idx] {
                        Some(OverlayCell::Glyph { ch, .. }) => line.push(ch),
                        Some(OverlayCell::Continuation) => {}
                        None => line.push(self.glyphs[idx]),
                    }
                }
                line
            })
            .collect()
    }

    /// Overlay style codes per cell, as hex digits.
    ///
    /// Cells without overlay text show [`EMPTY_GLYPH`]; trailing halves of
    /// wide glyphs repeat the code of their leading cell.
    pub fn style_lines(&self) -> Vec<String> {
        let width = self.size.width as usize;
        (0..self.size.height as usize)
            .map(|y| {
                let mut last = EMPTY_GLYPH;
                self.overlay[y * width..(y + 1) * width]
                    .iter()
                    .map(|cell| {
                        last = match cell {
                            Some(OverlayCell::Glyph { style, .. }) => {
                                char::from_digit(u32::from(style.code()), 16).unwrap_or('?')
                            }
                            Some(OverlayCell::Continuation) => last,
                            None => EMPTY_GLYPH,
                        };
                        last
                    })
                    .collect()
            })
            .collect()
    }
}

impl GlyphGrid for GlyphBuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn glyph_at(&self, p: Point) -> char {
        self.index(p)
            .map_or(EMPTY_GLYPH, |idx| self.glyphs[idx])
    }

    fn lock(&mut self, p: Point) {
        if let Some(idx) = self.index(p) {
            self.locks[idx] = true;
        }
    }

    fn is_locked(&self, p: Point) -> bool {
        self.index(p).is_some_and(|idx| self.locks[idx])
    }

    fn clear_locks(&mut self) {
        self.locks.fill(false);
    }

    fn write(&mut self, text: &str, p: Point, max_width: usize, style: StyleTag) {
        if p.y >= self.size.height {
            return;
        }
        let max_x = (p.x as usize)
            .saturating_add(max_width)
            .min(self.size.width as usize);
        let mut x = p.x as usize;
        let visible = truncate_to_width(text, max_x.saturating_sub(x));
        for grapheme in visible.graphemes(true) {
            let w = grapheme.width();
            if w == 0 {
                continue;
            }
            if let Some(ch) = grapheme.chars().next() {
                let row = p.y as usize * self.size.width as usize;
                self.overlay[row + x] = Some(OverlayCell::Glyph { ch, style });
                for cont in 1..w {
                    self.overlay[row + x + cont] = Some(OverlayCell::Continuation);
                }
            }
            x += w;
        }
    }
}

impl fmt::Display for GlyphBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

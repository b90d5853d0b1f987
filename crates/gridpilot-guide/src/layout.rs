#![forbid(unsafe_code)]

//! Column-snaking guide layout.
//!
//! Entries fill a column top to bottom, then continue at the top of the next
//! column to the right:
//!
//! ```text
//!   x = left + column_width * (n / rows)
//!   y = top + (n % rows)
//!   rows = grid_height - reserved_rows
//! ```
//!
//! Columns are never wrapped back to the left; callers size the grid for the
//! content, and [`PlacedEntry::visible`] reports which entries start inside it.
//!
//! Key/value rows draw the key clipped to the category key width and the value
//! right after the key's own width. The category key width is computed when a
//! title is placed, by looking ahead over the key/value run that follows it, and
//! it stays in effect until the next title, including across free text.

use gridpilot_core::text::display_width;
use gridpilot_core::{Point, Size, StyleTag};
use smallvec::SmallVec;

use crate::entry::GuideEntry;

/// Rows reserved for the guide header.
pub const TOP_MARGIN: u16 = 5;
/// Blank columns left of the first guide column.
pub const LEFT_MARGIN: u16 = 2;
/// Width of one guide column.
pub const COLUMN_WIDTH: u16 = 32;
/// Rows of the grid height not available to entries.
pub const RESERVED_ROWS: u16 = 7;

/// Key width in effect before any title is placed.
const INITIAL_KEY_WIDTH: usize = 1;

/// One text run to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSpan {
    pub text: String,
    pub pos: Point,
    pub max_width: usize,
    pub style: StyleTag,
}

/// Placement of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedEntry {
    /// Index into the input sequence.
    pub index: usize,
    /// Guide column (page), 0-based.
    pub column: usize,
    /// Row within the column, 0-based.
    pub row: u16,
    /// Top-left cell of the entry.
    pub origin: Point,
    /// Whether `origin` lies inside the grid width.
    pub visible: bool,
    /// Text runs: one for titles and free text, key then value for items.
    pub spans: SmallVec<[PlacedSpan; 2]>,
}

/// Guide layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideLayout {
    pub top_margin: u16,
    pub left_margin: u16,
    pub column_width: u16,
    pub reserved_rows: u16,
}

impl Default for GuideLayout {
    fn default() -> Self {
        Self {
            top_margin: TOP_MARGIN,
            left_margin: LEFT_MARGIN,
            column_width: COLUMN_WIDTH,
            reserved_rows: RESERVED_ROWS,
        }
    }
}

impl GuideLayout {
    /// Entry rows per column for a grid of `grid_height` rows. Never zero.
    #[must_use]
    pub fn usable_rows(&self, grid_height: u16) -> u16 {
        grid_height.saturating_sub(self.reserved_rows).max(1)
    }

    /// Column, row, and origin of the `n`-th entry.
    #[must_use]
    pub fn cell(&self, n: usize, usable_rows: u16) -> (usize, u16, Point) {
        let rows = usable_rows.max(1) as usize;
        let column = n / rows;
        let row = (n % rows) as u16;
        let x = (self.left_margin as u64)
            .saturating_add((self.column_width as u64).saturating_mul(column as u64));
        let x = u16::try_from(x).unwrap_or(u16::MAX);
        let y = self.top_margin.saturating_add(row);
        (column, row, Point::new(x, y))
    }

    /// Number of guide columns `entry_count` entries occupy.
    #[must_use]
    pub fn columns_needed(&self, entry_count: usize, grid_height: u16) -> usize {
        entry_count.div_ceil(self.usable_rows(grid_height) as usize)
    }

    /// Grid width needed to show every column in full.
    #[must_use]
    pub fn required_width(&self, entry_count: usize, grid_height: u16) -> usize {
        self.left_margin as usize
            + self.column_width as usize * self.columns_needed(entry_count, grid_height)
    }

    /// Place every entry.
    ///
    /// Pure: the same entries and size always produce the same placements.
    #[must_use]
    pub fn layout(&self, entries: &[GuideEntry], size: Size) -> Vec<PlacedEntry> {
        let rows = self.usable_rows(size.height);
        let col = self.column_width as usize;
        let mut key_width = INITIAL_KEY_WIDTH;
        let mut placed = Vec::with_capacity(entries.len());

        for (n, entry) in entries.iter().enumerate() {
            let (column, row, origin) = self.cell(n, rows);
            let mut spans = SmallVec::new();

            match entry {
                GuideEntry::KeyValue { key, value } => {
                    let value_x = (origin.x as usize)
                        .saturating_add(display_width(key))
                        .saturating_add(1)
                        .min(u16::MAX as usize) as u16;
                    spans.push(PlacedSpan {
                        text: key.clone(),
                        pos: origin,
                        max_width: key_width,
                        style: StyleTag::Accent,
                    });
                    spans.push(PlacedSpan {
                        text: value.clone(),
                        pos: Point::new(value_x, origin.y),
                        max_width: col.saturating_sub(key_width + 1),
                        style: StyleTag::Body,
                    });
                }
                GuideEntry::CategoryTitle(name) => {
                    spans.push(PlacedSpan {
                        text: name.clone(),
                        pos: origin,
                        max_width: col,
                        style: StyleTag::Title,
                    });
                    key_width = run_key_width(&entries[n + 1..]);
                }
                GuideEntry::FreeText(text) => {
                    spans.push(PlacedSpan {
                        text: text.clone(),
                        pos: origin,
                        max_width: col,
                        style: StyleTag::Accent,
                    });
                }
            }

            placed.push(PlacedEntry {
                index: n,
                column,
                row,
                origin,
                visible: origin.x < size.width,
                spans,
            });
        }
        placed
    }
}

/// Widest key in the key/value run at the start of `rest`; 0 for an empty run.
///
/// The browser guide used negative infinity here, leaving the value width of
/// a later stale-width item unbounded; 0 caps it at `column_width - 1`.
fn run_key_width(rest: &[GuideEntry]) -> usize {
    rest.iter()
        .map_while(GuideEntry::key)
        .map(display_width)
        .max()
        .unwrap_or(0)
}

/// Lay out `entries` with the default parameters.
#[must_use]
pub fn layout(entries: &[GuideEntry], size: Size) -> Vec<PlacedEntry> {
    GuideLayout::default().layout(entries, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_widths(placed: &[PlacedEntry]) -> Vec<usize> {
        placed
            .iter()
            .filter(|p| p.spans.len() == 2)
            .map(|p| p.spans[0].max_width)
            .collect()
    }

    #[test]
    fn usable_rows_subtracts_reserved() {
        let l = GuideLayout::default();
        assert_eq!(l.usable_rows(17), 10);
        assert_eq!(l.usable_rows(30), 23);
    }

    #[test]
    fn usable_rows_never_zero() {
        let l = GuideLayout::default();
        assert_eq!(l.usable_rows(7), 1);
        assert_eq!(l.usable_rows(0), 1);
    }

    #[test]
    fn eleventh_item_starts_second_column() {
        let mut entries = vec![GuideEntry::title("Keys")];
        for i in 0..11 {
            entries.push(GuideEntry::item(format!("k{i}"), "v"));
        }
        // Titles take a slot too; index the sequence directly.
        let placed = layout(&entries, Size::new(80, 17));
        assert_eq!(placed[9].origin, Point::new(2, 14));
        assert_eq!(placed[10].origin, Point::new(34, 5));
        assert_eq!(placed[10].column, 1);
        assert_eq!(placed[10].row, 0);
    }

    #[test]
    fn title_look_ahead_sets_key_width() {
        let entries = vec![
            GuideEntry::title("Cat"),
            GuideEntry::item("ab", "1"),
            GuideEntry::item("abcde", "2"),
            GuideEntry::item("abc", "3"),
        ];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(key_widths(&placed), vec![5, 5, 5]);
        assert_eq!(placed[1].spans[1].max_width, 32 - 5 - 1);
    }

    #[test]
    fn value_follows_key_not_column() {
        let entries = vec![
            GuideEntry::title("Cat"),
            GuideEntry::item("ab", "short"),
            GuideEntry::item("abcde", "long"),
        ];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(placed[1].spans[1].pos, Point::new(2 + 2 + 1, 6));
        assert_eq!(placed[2].spans[1].pos, Point::new(2 + 5 + 1, 7));
    }

    #[test]
    fn stale_width_carries_across_free_text() {
        let entries = vec![
            GuideEntry::title("Cat"),
            GuideEntry::item("ab", "1"),
            GuideEntry::item("abcde", "2"),
            GuideEntry::item("abc", "3"),
            GuideEntry::text("a note"),
            GuideEntry::item("x", "4"),
            GuideEntry::item("yyyyyyy", "5"),
        ];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(key_widths(&placed), vec![5, 5, 5, 5, 5]);
    }

    #[test]
    fn items_before_any_title_use_initial_width() {
        let entries = vec![GuideEntry::item("abc", "v")];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(placed[0].spans[0].max_width, 1);
        assert_eq!(placed[0].spans[1].max_width, 30);
    }

    #[test]
    fn title_without_items_yields_zero_width() {
        let entries = vec![
            GuideEntry::title("Empty"),
            GuideEntry::text("nothing here"),
            GuideEntry::item("k", "v"),
        ];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(placed[2].spans[0].max_width, 0);
        assert_eq!(placed[2].spans[1].max_width, 31);
    }

    #[test]
    fn span_styles() {
        let entries = vec![
            GuideEntry::title("Cat"),
            GuideEntry::item("k", "v"),
            GuideEntry::text("t"),
        ];
        let placed = layout(&entries, Size::new(80, 30));
        assert_eq!(placed[0].spans[0].style, StyleTag::Title);
        assert_eq!(placed[0].spans[0].max_width, 32);
        assert_eq!(placed[1].spans[0].style, StyleTag::Accent);
        assert_eq!(placed[1].spans[1].style, StyleTag::Body);
        assert_eq!(placed[2].spans[0].style, StyleTag::Accent);
        assert_eq!(placed[2].spans[0].max_width, 32);
    }

    #[test]
    fn wide_key_width_saturates_value() {
        let key = "k".repeat(40);
        let entries = vec![GuideEntry::title("Cat"), GuideEntry::item(key, "v")];
        let placed = layout(&entries, Size::new(200, 30));
        assert_eq!(placed[1].spans[0].max_width, 40);
        assert_eq!(placed[1].spans[1].max_width, 0);
    }

    #[test]
    fn visibility_tracks_grid_width() {
        let entries: Vec<_> = (0..4).map(|i| GuideEntry::text(format!("{i}"))).collect();
        // One row per column: x = 2, 34, 66, 98.
        let placed = layout(&entries, Size::new(70, 8));
        let visible: Vec<bool> = placed.iter().map(|p| p.visible).collect();
        assert_eq!(visible, vec![true, true, true, false]);
    }

    #[test]
    fn columns_needed_and_width() {
        let l = GuideLayout::default();
        assert_eq!(l.columns_needed(0, 17), 0);
        assert_eq!(l.columns_needed(10, 17), 1);
        assert_eq!(l.columns_needed(11, 17), 2);
        assert_eq!(l.required_width(11, 17), 2 + 64);
    }

    #[test]
    fn empty_entries_place_nothing() {
        assert!(layout(&[], Size::new(80, 30)).is_empty());
    }

    #[test]
    fn far_columns_saturate_x() {
        let l = GuideLayout::default();
        let (_, _, p) = l.cell(10_000, 1);
        assert_eq!(p.x, u16::MAX);
    }
}

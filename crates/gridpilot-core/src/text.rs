#![forbid(unsafe_code)]

//! Display-width helpers for overlay text.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `text` in grid cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Truncate text so it fits within `max_width` cells.
///
/// Respects grapheme boundaries; a wide grapheme that would straddle the
/// limit is dropped.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut current = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.width();
        if current + w > max_width {
            return &text[..idx];
        }
        current += w;
    }
    text
}

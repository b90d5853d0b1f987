//! Property-based invariant tests for the guide layout.
//!
//! 1. Layout is deterministic.
//! 2. Every entry lands at the snake position for its index.
//! 3. Key width within a titled run equals the run's widest key.
//! 4. Key widths persist until the next title.
//! 5. No panics on extreme grid sizes.

use gridpilot_core::Size;
use gridpilot_core::text::display_width;
use gridpilot_guide::{GuideEntry, GuideLayout, layout};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z+#]{0,12}"
}

fn entry_strategy() -> impl Strategy<Value = GuideEntry> {
    prop_oneof![
        word().prop_map(GuideEntry::title),
        (word(), word()).prop_map(|(k, v)| GuideEntry::item(k, v)),
        word().prop_map(GuideEntry::text),
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<GuideEntry>> {
    proptest::collection::vec(entry_strategy(), 0..80)
}

/// Key width expected for each key/value entry, walking the sequence.
fn expected_widths(entries: &[GuideEntry]) -> Vec<usize> {
    let mut width = 1;
    let mut out = Vec::new();
    for (i, e) in entries.iter().enumerate() {
        match e {
            GuideEntry::CategoryTitle(_) => {
                width = entries[i + 1..]
                    .iter()
                    .take_while(|e| e.key().is_some())
                    .filter_map(|e| e.key())
                    .map(display_width)
                    .max()
                    .unwrap_or(0);
            }
            GuideEntry::KeyValue { .. } => out.push(width),
            GuideEntry::FreeText(_) => {}
        }
    }
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_is_deterministic(entries in entries_strategy(), w in 0u16..300, h in 0u16..80) {
        let size = Size::new(w, h);
        prop_assert_eq!(layout(&entries, size), layout(&entries, size));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Snake positions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn origins_follow_snake(entries in entries_strategy(), h in 8u16..60) {
        let rows = (h - 7) as usize;
        let placed = layout(&entries, Size::new(400, h));
        prop_assert_eq!(placed.len(), entries.len());
        for (n, p) in placed.iter().enumerate() {
            prop_assert_eq!(p.index, n);
            prop_assert_eq!(p.origin.x as usize, 2 + 32 * (n / rows));
            prop_assert_eq!(p.origin.y as usize, 5 + n % rows);
            prop_assert_eq!(p.spans[0].pos, p.origin);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Key widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn key_widths_match_runs(entries in entries_strategy()) {
        let placed = layout(&entries, Size::new(200, 40));
        let widths: Vec<usize> = placed
            .iter()
            .filter(|p| p.spans.len() == 2)
            .map(|p| p.spans[0].max_width)
            .collect();
        prop_assert_eq!(widths, expected_widths(&entries));
    }
}

proptest! {
    #[test]
    fn value_width_complements_key(entries in entries_strategy()) {
        let placed = layout(&entries, Size::new(200, 40));
        for p in placed.iter().filter(|p| p.spans.len() == 2) {
            let key_w = p.spans[0].max_width;
            prop_assert_eq!(p.spans[1].max_width, 32usize.saturating_sub(key_w + 1));
            prop_assert_eq!(
                p.spans[1].pos.x as usize,
                p.origin.x as usize + display_width(&p.spans[0].text) + 1
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Extreme sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extreme_sizes_do_not_panic(entries in entries_strategy(), w in any::<u16>(), h in any::<u16>()) {
        let placed = layout(&entries, Size::new(w, h));
        prop_assert_eq!(placed.len(), entries.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Worked scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn ten_usable_rows_wrap_to_second_column() {
    let entries: Vec<GuideEntry> = std::iter::once(GuideEntry::title("Keys"))
        .chain((0..11).map(|i| GuideEntry::item(format!("{i}"), "x")))
        .collect();
    let placed = layout(&entries, Size::new(100, 17));
    assert_eq!(GuideLayout::default().usable_rows(17), 10);
    assert_eq!((placed[9].origin.x, placed[9].origin.y), (2, 14));
    assert_eq!((placed[10].origin.x, placed[10].origin.y), (34, 5));
}

#[test]
fn look_ahead_width_and_reuse() {
    let entries = vec![
        GuideEntry::title("Cat"),
        GuideEntry::item("ab", "1"),
        GuideEntry::item("abcde", "2"),
        GuideEntry::item("abc", "3"),
        GuideEntry::text("between"),
        GuideEntry::item("z", "4"),
    ];
    let placed = layout(&entries, Size::new(100, 30));
    for i in [1, 2, 3, 5] {
        assert_eq!(placed[i].spans[0].max_width, 5, "entry {i}");
    }
}

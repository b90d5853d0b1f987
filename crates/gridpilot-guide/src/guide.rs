#![forbid(unsafe_code)]

//! The guide overlay: header, entries, and visibility.

use gridpilot_core::{GlyphGrid, Point, StyleTag, debug_span};
use gridpilot_operator::OperatorLibrary;

use crate::accel::{AcceleratorMap, KeyLabelPolicy};
use crate::builder::GuideBuilder;
use crate::entry::GuideEntry;
use crate::layout::{GuideLayout, PlacedEntry};

/// Width limit for header lines.
const HEADER_WIDTH: usize = 100;

/// Static text above the guide columns.
///
/// The title renders on row 0; each body line on the following rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideHeader {
    pub title: String,
    pub lines: Vec<String>,
}

impl GuideHeader {
    /// Header for the synth bridge, naming the platform modifier.
    #[must_use]
    pub fn bridge(policy: &KeyLabelPolicy) -> Self {
        Self {
            title: "ORCΛ PLΛY".to_string(),
            lines: vec![
                "A combination of the famous Orca esoteric programming language".to_string(),
                "and the Pilot synthesizer that allows to run Orca in a browser".to_string(),
                format!(
                    "without additional setup. Press {}+R for an example.",
                    policy.modifier_key()
                ),
            ],
        }
    }
}

/// Guide overlay state.
#[derive(Debug, Clone)]
pub struct Guide {
    entries: Vec<GuideEntry>,
    header: GuideHeader,
    layout: GuideLayout,
    visible: bool,
}

impl Guide {
    /// Create a hidden guide.
    #[must_use]
    pub fn new(entries: Vec<GuideEntry>, header: GuideHeader) -> Self {
        Self {
            entries,
            header,
            layout: GuideLayout::default(),
            visible: false,
        }
    }

    /// The bridge guide: operators and accelerators under the bridge header.
    #[must_use]
    pub fn standard(
        library: &OperatorLibrary,
        accels: &AcceleratorMap,
        policy: &KeyLabelPolicy,
    ) -> Self {
        Self::new(
            GuideBuilder::standard(library, accels, policy),
            GuideHeader::bridge(policy),
        )
    }

    pub fn entries(&self) -> &[GuideEntry] {
        &self.entries
    }

    pub fn header(&self) -> &GuideHeader {
        &self.header
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Placements for a grid of `size`.
    #[must_use]
    pub fn placements(&self, size: gridpilot_core::Size) -> Vec<PlacedEntry> {
        self.layout.layout(&self.entries, size)
    }

    /// Draw header and entries onto `grid`'s overlay.
    ///
    /// Returns `false` without drawing when the guide is hidden.
    pub fn render<G>(&self, grid: &mut G) -> bool
    where
        G: GlyphGrid + ?Sized,
    {
        if !self.visible {
            return false;
        }
        let size = grid.size();
        let _span = debug_span!(
            "guide_render",
            w = size.width,
            h = size.height,
            entries = self.entries.len()
        )
        .entered();

        let x = self.layout.left_margin;
        grid.write(&self.header.title, Point::new(x, 0), HEADER_WIDTH, StyleTag::Heading);
        for (row, line) in self.header.lines.iter().enumerate() {
            let Ok(y) = u16::try_from(row + 1) else { break };
            grid.write(line, Point::new(x, y), HEADER_WIDTH, StyleTag::Body);
        }

        for placed in self.placements(size) {
            for span in &placed.spans {
                grid.write(&span.text, span.pos, span.max_width, span.style);
            }
        }
        true
    }
}

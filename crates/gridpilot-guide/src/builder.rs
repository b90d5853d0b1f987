#![forbid(unsafe_code)]

//! Guide entry assembly.

use gridpilot_operator::OperatorLibrary;

use crate::accel::{AcceleratorMap, KeyLabelPolicy};
use crate::entry::GuideEntry;

/// Builds the guide entry sequence in rendering order.
///
/// # Example
///
/// ```
/// use gridpilot_guide::{GuideBuilder, GuideEntry};
///
/// let entries = GuideBuilder::new()
///     .title("Transport")
///     .item("Space", "Play/Pause")
///     .text("Bang a ; to play a note.")
///     .build();
/// assert_eq!(entries.len(), 3);
/// assert!(entries[0].is_title());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuideBuilder {
    entries: Vec<GuideEntry>,
}

impl GuideBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operators followed by every accelerator category.
    #[must_use]
    pub fn standard(
        library: &OperatorLibrary,
        accels: &AcceleratorMap,
        policy: &KeyLabelPolicy,
    ) -> Vec<GuideEntry> {
        Self::new()
            .operators(library)
            .accelerators(accels, policy)
            .build()
    }

    #[must_use]
    pub fn title(mut self, name: impl Into<String>) -> Self {
        self.entries.push(GuideEntry::title(name));
        self
    }

    #[must_use]
    pub fn item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(GuideEntry::item(key, value));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.entries.push(GuideEntry::text(text));
        self
    }

    /// An `Operators` title and one row per listed operator: glyph, then info.
    #[must_use]
    pub fn operators(mut self, library: &OperatorLibrary) -> Self {
        self.entries.push(GuideEntry::title("Operators"));
        for op in library.listed() {
            self.entries
                .push(GuideEntry::item(op.glyph.to_string(), op.info.clone()));
        }
        self
    }

    /// Per category: a title, then one row per bound accelerator.
    ///
    /// Actions without an accelerator are skipped; the category title is
    /// emitted regardless.
    #[must_use]
    pub fn accelerators(mut self, accels: &AcceleratorMap, policy: &KeyLabelPolicy) -> Self {
        for (category, bindings) in accels.sorted() {
            self.entries.push(GuideEntry::title(category));
            for binding in bindings {
                if let Some(accel) = &binding.accelerator {
                    self.entries
                        .push(GuideEntry::item(policy.format(accel), binding.name.clone()));
                }
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<GuideEntry> {
        self.entries
    }
}

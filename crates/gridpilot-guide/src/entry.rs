#![forbid(unsafe_code)]

//! Guide content entries.

/// One line of guide content.
///
/// Entries render in sequence order. A [`GuideEntry::KeyValue`] run directly
/// after a [`GuideEntry::CategoryTitle`] shares that category's key column
/// width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuideEntry {
    /// Category heading, e.g. `Operators` or `Edit`.
    CategoryTitle(String),
    /// A key (glyph or accelerator) and its description.
    KeyValue { key: String, value: String },
    /// Free-standing text spanning the whole column.
    FreeText(String),
}

impl GuideEntry {
    pub fn title(name: impl Into<String>) -> Self {
        Self::CategoryTitle(name.into())
    }

    pub fn item(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::FreeText(text.into())
    }

    /// Key of a key/value entry.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyValue { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_title(&self) -> bool {
        matches!(self, Self::CategoryTitle(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(GuideEntry::title("Edit"), GuideEntry::CategoryTitle("Edit".into()));
        assert_eq!(
            GuideEntry::item("a", "add"),
            GuideEntry::KeyValue {
                key: "a".into(),
                value: "add".into()
            }
        );
        assert_eq!(GuideEntry::text("hi"), GuideEntry::FreeText("hi".into()));
    }

    #[test]
    fn key_only_for_items() {
        assert_eq!(GuideEntry::item("⌘+R", "Run").key(), Some("⌘+R"));
        assert_eq!(GuideEntry::title("Edit").key(), None);
        assert_eq!(GuideEntry::text("x").key(), None);
    }

    #[test]
    fn long_titles_stay_titles() {
        // A title is a title by tag, not by length.
        let entry = GuideEntry::title("A category title well past fifteen characters");
        assert!(entry.is_title());
        assert!(!GuideEntry::text("short").is_title());
    }
}

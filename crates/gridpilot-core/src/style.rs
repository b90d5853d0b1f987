#![forbid(unsafe_code)]

//! Render style tags for overlay text.

/// Style attached to text written onto the grid overlay.
///
/// Each tag carries a stable numeric code understood by the host theme
/// (the sprite type index of the grid client).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    /// Banner line at the top of the guide.
    Heading,
    /// Body copy and key descriptions.
    #[default]
    Body,
    /// Keys, accelerators, and free text.
    Accent,
    /// Category titles.
    Title,
}

impl StyleTag {
    /// Numeric sprite code for the host theme.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Heading => 4,
            Self::Body => 10,
            Self::Accent => 3,
            Self::Title => 8,
        }
    }
}

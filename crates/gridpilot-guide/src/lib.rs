#![forbid(unsafe_code)]

//! Paginated help guide for the glyph grid.
//!
//! The guide is an ordered list of [`GuideEntry`] values (category titles,
//! key/value rows, free text) snaked down 32-cell columns below a fixed
//! header:
//!
//! - [`GuideBuilder`] assembles entries from the operator library and the
//!   accelerator map.
//! - [`GuideLayout`] computes where every entry lands.
//! - [`Guide`] owns the entries, the header, and visibility, and renders onto
//!   any [`GlyphGrid`](gridpilot_core::GlyphGrid).
//!
//! ```
//! use gridpilot_core::Size;
//! use gridpilot_guide::{GuideEntry, layout};
//!
//! let entries = vec![
//!     GuideEntry::title("Edit"),
//!     GuideEntry::item("Ctrl+Z", "Undo"),
//!     GuideEntry::item("Ctrl+Y", "Redo"),
//! ];
//! let placed = layout(&entries, Size::new(80, 20));
//! assert_eq!(placed[1].spans[0].max_width, 6);
//! ```

pub mod accel;
pub mod builder;
pub mod entry;
pub mod guide;
pub mod layout;

pub use accel::{Accelerator, AcceleratorMap, KeyLabelPolicy, KeyStyle};
pub use builder::GuideBuilder;
pub use entry::GuideEntry;
pub use guide::{Guide, GuideHeader};
pub use layout::{GuideLayout, PlacedEntry, PlacedSpan, layout};

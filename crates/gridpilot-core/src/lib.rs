#![forbid(unsafe_code)]

//! Core: glyph grid surface, geometry, render styles, and logging.
//!
//! Everything in gridpilot reads and writes through the [`GlyphGrid`] trait.
//! [`GlyphBuffer`] is the in-memory implementation used by the operator host,
//! the guide renderer, and tests.

pub mod geometry;
pub mod grid;
pub mod logging;
pub mod style;
pub mod text;

pub use geometry::{Point, Size};
pub use grid::{EMPTY_GLYPH, GlyphBuffer, GlyphGrid, TRIGGER_GLYPH};
pub use style::StyleTag;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

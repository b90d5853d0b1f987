#![forbid(unsafe_code)]

//! gridpilot public facade.
//!
//! Re-exports the grid surface, the command operators, and the help guide,
//! and ties them together in a [`Bridge`] that advances the grid one frame at
//! a time.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use gridpilot_core::{GlyphBuffer, GlyphGrid, Point, Size, StyleTag};

// --- Operator re-exports ---------------------------------------------------

pub use gridpilot_operator::{
    CommandChannel, CommandOperator, CommandParseError, CommandQueue, CommandRouter, CommandSink,
    EmitDecision, NoOpReason, OperatorHost, OperatorKind, OperatorLibrary, Played, RoutedCommand,
    TickReport,
};

// --- Guide re-exports ------------------------------------------------------

pub use gridpilot_guide::{
    AcceleratorMap, Guide, GuideBuilder, GuideEntry, GuideHeader, GuideLayout, KeyLabelPolicy,
    KeyStyle,
};

mod bridge;
pub mod programs;

pub use bridge::Bridge;
pub use programs::EXAMPLES;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for gridpilot tools.
#[derive(Debug)]
pub enum Error {
    /// Failure writing output.
    Io(std::io::Error),
    /// A commander line could not be routed.
    Command(CommandParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CommandParseError> for Error {
    fn from(err: CommandParseError) -> Self {
        Self::Command(err)
    }
}

/// Standard result type for gridpilot APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bridge, CommandChannel, CommandSink, Error, GlyphBuffer, GlyphGrid, Guide, OperatorKind,
        Played, Point, Result, Size,
    };
}

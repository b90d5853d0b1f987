#![forbid(unsafe_code)]

//! Grid command operators.
//!
//! A command operator is a cell holding `;` (note) or `=` (effect). Each tick
//! it reads the glyph run to its right, locks the cells it visited, and, when
//! banged by a neighboring `*` or activated by hand, hands the run to a
//! [`CommandChannel`] as a synthesizer command.
//!
//! ```
//! use gridpilot_core::{GlyphBuffer, Point};
//! use gridpilot_operator::{CommandOperator, CommandQueue, OperatorKind, Played};
//!
//! let mut grid = GlyphBuffer::from_text(".*...\n.;C4q.");
//! let mut queue = CommandQueue::new(Vec::<Played>::new());
//! let mut op = CommandOperator::new(Point::new(1, 1), OperatorKind::Note);
//!
//! let decision = op.evaluate(&mut grid, &mut queue, false);
//! assert_eq!(decision.message(), Some("C4q"));
//! assert!(!op.draws());
//! assert_eq!(queue.pending_notes(), ["C4q".to_string()]);
//! ```

pub mod channel;
pub mod commander;
pub mod host;
pub mod library;
pub mod operator;

#[cfg(any(test, feature = "test-helpers"))]
pub use channel::{ChannelCall, RecordingChannel};
pub use channel::{CommandChannel, CommandQueue, CommandSink, Played};
pub use commander::{CommandParseError, CommandRouter, RoutedCommand};
pub use host::{Evaluated, OperatorHost, TickReport};
pub use library::{OperatorInfo, OperatorLibrary};
pub use operator::{
    CommandOperator, EmitDecision, NoOpReason, OperatorKind, SCAN_LIMIT, evaluate, scan_message,
};

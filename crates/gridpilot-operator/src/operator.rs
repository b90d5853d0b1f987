#![forbid(unsafe_code)]

//! The command operator: scan, lock, and conditionally emit.

use gridpilot_core::{EMPTY_GLYPH, GlyphGrid, Point, trace};

use crate::channel::CommandChannel;

/// Maximum number of cells an operator reads to its right.
pub const SCAN_LIMIT: u16 = 36;

/// Which synthesizer command an operator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `;`: note command for the synth/sampler.
    Note,
    /// `=`: effect or drum command.
    Effect,
}

impl OperatorKind {
    /// Glyph that instantiates this operator.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Note => ';',
            Self::Effect => '=',
        }
    }

    /// Operator kind for a glyph, if the glyph is a command operator.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ';' => Some(Self::Note),
            '=' => Some(Self::Effect),
            _ => None,
        }
    }

    /// Shortest message that is forwarded.
    #[must_use]
    pub const fn min_message_length(self) -> usize {
        match self {
            Self::Note => 3,
            Self::Effect => 2,
        }
    }

    /// Short operator name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Note => "pilot synth",
            Self::Effect => "pilot effect/drum",
        }
    }

    /// One-line description shown in the guide.
    #[must_use]
    pub const fn info(self) -> &'static str {
        match self {
            Self::Note => "PILOT synth/sampler",
            Self::Effect => "PILOT effect/drum",
        }
    }
}

/// Why an evaluation did not emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The scanned message was shorter than the kind's minimum.
    TooShort { len: usize, min: usize },
    /// Neither forced nor banged by a neighboring trigger.
    Untriggered,
}

/// Outcome of one operator evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitDecision {
    /// Nothing reached the channel.
    NoOp(NoOpReason),
    /// The message was pushed; `flushed` if it was also run.
    Emit { message: String, flushed: bool },
}

impl EmitDecision {
    /// Whether the operator fired.
    #[must_use]
    pub fn is_emit(&self) -> bool {
        matches!(self, Self::Emit { .. })
    }

    /// The emitted message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Emit { message, .. } => Some(message.as_str()),
            Self::NoOp(_) => None,
        }
    }
}

/// Read the glyph run to the right of `origin`, locking every visited cell.
///
/// Visits `(origin.x + i, origin.y)` for `i` in `1..=limit`. Each in-bounds
/// cell is locked before it is inspected, so the empty terminator is locked
/// too. The scan stops at the first empty glyph or at the grid edge; cells past
/// the edge are neither locked nor counted.
///
/// Returns the message and the number of cells locked.
pub fn scan_message<G>(grid: &mut G, origin: Point, limit: u16) -> (String, u16)
where
    G: GlyphGrid + ?Sized,
{
    let mut message = String::new();
    let mut visited = 0u16;
    for i in 1..=limit {
        let Some(x) = origin.x.checked_add(i) else {
            break;
        };
        let p = Point::new(x, origin.y);
        if !grid.in_bounds(p) {
            break;
        }
        let glyph = grid.glyph_at(p);
        grid.lock(p);
        visited += 1;
        if glyph == EMPTY_GLYPH {
            break;
        }
        message.push(glyph);
    }
    (message, visited)
}

/// A note or effect operator anchored at one grid cell.
///
/// The host instantiates one per operator glyph each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOperator {
    origin: Point,
    kind: OperatorKind,
    draw: bool,
}

impl CommandOperator {
    /// Create an operator at `origin`.
    pub fn new(origin: Point, kind: OperatorKind) -> Self {
        Self {
            origin,
            kind,
            draw: true,
        }
    }

    /// Operator cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Operator kind.
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Whether the operator should be redrawn this tick. Cleared when it fires.
    pub fn draws(&self) -> bool {
        self.draw
    }

    /// Evaluate the operator for this tick.
    ///
    /// Scans and locks first, then checks length, then the trigger condition.
    /// `force` marks manual activation: it bypasses the neighbor check and
    /// drains the pushed command immediately.
    pub fn evaluate<G, C>(&mut self, grid: &mut G, channel: &mut C, force: bool) -> EmitDecision
    where
        G: GlyphGrid + ?Sized,
        C: CommandChannel + ?Sized,
    {
        let (message, _) = scan_message(grid, self.origin, SCAN_LIMIT);
        trace!(
            x = self.origin.x,
            y = self.origin.y,
            len = message.len(),
            "operator scan"
        );

        let min = self.kind.min_message_length();
        let len = message.chars().count();
        if len < min {
            return EmitDecision::NoOp(NoOpReason::TooShort { len, min });
        }
        if !force && !grid.has_trigger_neighbor(self.origin) {
            return EmitDecision::NoOp(NoOpReason::Untriggered);
        }

        self.draw = false;
        match self.kind {
            OperatorKind::Note => {
                channel.push_note(&message);
                if force {
                    channel.run_note();
                }
            }
            OperatorKind::Effect => {
                channel.push_effect(&message);
                if force {
                    channel.run_effect();
                }
            }
        }
        EmitDecision::Emit {
            message,
            flushed: force,
        }
    }
}

/// Evaluate a one-off operator of `kind` at `origin`.
pub fn evaluate<G, C>(
    grid: &mut G,
    origin: Point,
    kind: OperatorKind,
    force: bool,
    channel: &mut C,
) -> EmitDecision
where
    G: GlyphGrid + ?Sized,
    C: CommandChannel + ?Sized,
{
    CommandOperator::new(origin, kind).evaluate(grid, channel, force)
}

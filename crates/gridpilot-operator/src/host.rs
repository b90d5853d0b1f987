#![forbid(unsafe_code)]

//! Per-tick operator instantiation and evaluation.
//!
//! The host owns the tick loop. At the start of each tick it clears the grid
//! locks, then walks the grid row-major and evaluates a fresh
//! [`CommandOperator`] for every command glyph it finds on an unlocked cell.
//! Cells locked by an earlier operator's scan in the same tick are message
//! payload, not operators.

use gridpilot_core::{GlyphGrid, Point, debug};

use crate::channel::CommandChannel;
use crate::library::OperatorLibrary;
use crate::operator::{CommandOperator, EmitDecision, OperatorKind};

/// One evaluated operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluated {
    pub origin: Point,
    pub kind: OperatorKind,
    pub decision: EmitDecision,
}

/// Summary of one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Frame number of this tick (0-based).
    pub frame: u64,
    /// Evaluations in visit order.
    pub evaluated: Vec<Evaluated>,
}

impl TickReport {
    /// Number of operators that fired.
    pub fn emitted(&self) -> usize {
        self.evaluated.iter().filter(|e| e.decision.is_emit()).count()
    }

    /// Number of operators that did nothing.
    pub fn noops(&self) -> usize {
        self.evaluated.len() - self.emitted()
    }

    /// Origins of operators that fired and skip their redraw this tick.
    pub fn fired(&self) -> impl Iterator<Item = Point> + '_ {
        self.evaluated
            .iter()
            .filter(|e| e.decision.is_emit())
            .map(|e| e.origin)
    }
}

/// Drives command operators over a grid, one tick at a time.
#[derive(Debug, Clone)]
pub struct OperatorHost {
    library: OperatorLibrary,
    frame: u64,
}

impl Default for OperatorHost {
    fn default() -> Self {
        Self::new(OperatorLibrary::standard())
    }
}

impl OperatorHost {
    /// Create a host that recognizes the command glyphs installed in `library`.
    pub fn new(library: OperatorLibrary) -> Self {
        Self { library, frame: 0 }
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Operator metadata.
    pub fn library(&self) -> &OperatorLibrary {
        &self.library
    }

    /// Run one tick: clear locks, then evaluate every passive operator.
    pub fn tick<G, C>(&mut self, grid: &mut G, channel: &mut C) -> TickReport
    where
        G: GlyphGrid + ?Sized,
        C: CommandChannel + ?Sized,
    {
        grid.clear_locks();
        let size = grid.size();
        let mut report = TickReport {
            frame: self.frame,
            evaluated: Vec::new(),
        };

        for y in 0..size.height {
            for x in 0..size.width {
                let origin = Point::new(x, y);
                if grid.is_locked(origin) {
                    continue;
                }
                let Some(kind) = self.library.command_kind(grid.glyph_at(origin)) else {
                    continue;
                };
                let decision = CommandOperator::new(origin, kind).evaluate(grid, channel, false);
                report.evaluated.push(Evaluated {
                    origin,
                    kind,
                    decision,
                });
            }
        }

        debug!(
            frame = self.frame,
            operators = report.evaluated.len(),
            emitted = report.emitted(),
            "tick"
        );
        self.frame += 1;
        report
    }

    /// Manually activate the operator at `origin`.
    ///
    /// Returns `None` when `origin` does not hold a command operator.
    pub fn activate<G, C>(&self, grid: &mut G, channel: &mut C, origin: Point) -> Option<EmitDecision>
    where
        G: GlyphGrid + ?Sized,
        C: CommandChannel + ?Sized,
    {
        let kind = self.library.command_kind(grid.glyph_at(origin))?;
        Some(CommandOperator::new(origin, kind).evaluate(grid, channel, true))
    }
}

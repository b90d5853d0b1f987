#![forbid(unsafe_code)]

//! Operator metadata for the guide.

use crate::operator::OperatorKind;

/// Name and description of one operator glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    pub glyph: char,
    pub name: String,
    pub info: String,
}

impl OperatorInfo {
    #[must_use]
    pub fn new(glyph: char, name: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            glyph,
            name: name.into(),
            info: info.into(),
        }
    }
}

/// Base operators of the grid language, in library order.
const BASE_OPERATORS: &[(char, &str, &str)] = &[
    ('a', "add", "Outputs sum of inputs"),
    ('b', "subtract", "Outputs difference of inputs"),
    ('c', "clock", "Outputs modulo of frame"),
    ('d', "delay", "Bangs on modulo of frame"),
    ('e', "east", "Moves eastward, or bangs"),
    ('f', "if", "Bangs if inputs are equal"),
    ('g', "generator", "Writes operands with offset"),
    ('h', "halt", "Halts southward operand"),
    ('i', "increment", "Increments southward operand"),
    ('j', "jumper", "Outputs northward operand"),
    ('k', "konkat", "Reads multiple variables"),
    ('l', "lesser", "Outputs smallest of inputs"),
    ('m', "multiply", "Outputs product of inputs"),
    ('n', "north", "Moves Northward, or bangs"),
    ('o', "read", "Reads operand with offset"),
    ('p', "push", "Writes eastward operand"),
    ('q', "query", "Reads operands with offset"),
    ('r', "random", "Outputs random value"),
    ('s', "south", "Moves southward, or bangs"),
    ('t', "track", "Reads eastward operand"),
    ('u', "uclid", "Bangs on Euclidean rhythm"),
    ('v', "variable", "Reads and writes variable"),
    ('w', "west", "Moves westward, or bangs"),
    ('x', "write", "Writes operand with offset"),
    ('y', "jymper", "Outputs westward operand"),
    ('z', "lerp", "Transitions operand to input"),
    ('*', "bang", "Bangs neighboring operands"),
    ('#', "comment", "Halts line"),
    (':', "midi", "Sends MIDI note"),
    ('!', "cc", "Sends MIDI control change"),
    ('?', "pb", "Sends MIDI pitch bend"),
    ('%', "mono", "Sends MIDI monophonic note"),
    ('=', "osc", "Sends OSC message"),
    (';', "udp", "Sends UDP message"),
    ('$', "self", "Sends ORCA command"),
];

/// Ordered glyph → metadata table.
///
/// Registering an existing glyph replaces its metadata in place, keeping its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorLibrary {
    operators: Vec<OperatorInfo>,
}

impl OperatorLibrary {
    /// Empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base operators with the synth bridge installed on `;` and `=`.
    #[must_use]
    pub fn standard() -> Self {
        let mut lib = Self::new();
        for (glyph, name, info) in BASE_OPERATORS {
            lib.register(OperatorInfo::new(*glyph, *name, *info));
        }
        for kind in [OperatorKind::Note, OperatorKind::Effect] {
            lib.register(OperatorInfo::new(kind.glyph(), kind.name(), kind.info()));
        }
        lib
    }

    /// Insert or replace an operator.
    pub fn register(&mut self, op: OperatorInfo) {
        match self.operators.iter_mut().find(|o| o.glyph == op.glyph) {
            Some(existing) => *existing = op,
            None => self.operators.push(op),
        }
    }

    /// Metadata for `glyph`.
    #[must_use]
    pub fn get(&self, glyph: char) -> Option<&OperatorInfo> {
        self.operators.iter().find(|o| o.glyph == glyph)
    }

    /// Command operator kind installed on `glyph`, if any.
    #[must_use]
    pub fn command_kind(&self, glyph: char) -> Option<OperatorKind> {
        let kind = OperatorKind::from_glyph(glyph)?;
        let op = self.get(glyph)?;
        (op.name == kind.name()).then_some(kind)
    }

    /// Operators shown in the guide. Numeric glyphs are never listed.
    pub fn listed(&self) -> impl Iterator<Item = &OperatorInfo> {
        self.operators.iter().filter(|o| !o.glyph.is_ascii_digit())
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

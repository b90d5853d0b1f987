#![forbid(unsafe_code)]

//! Commander routing for typed `name:payload` commands.
//!
//! The grid client's command prompt accepts lines such as `note:C4` or
//! `eff:1rv`. These bypass the operator queue and play immediately.

use std::fmt;

use gridpilot_core::debug;

use crate::channel::CommandSink;
use crate::operator::OperatorKind;

/// A parsed commander line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedCommand {
    pub kind: OperatorKind,
    pub payload: String,
}

/// Why a commander line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// No `:` between name and payload.
    MissingSeparator,
    /// The name is not a synth command.
    UnknownCommand { name: String },
    /// Nothing after the `:`.
    EmptyPayload { name: String },
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected `name:payload`"),
            Self::UnknownCommand { name } => write!(f, "unknown command `{name}`"),
            Self::EmptyPayload { name } => write!(f, "command `{name}` has an empty payload"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Maps commander names to synth commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRouter;

impl CommandRouter {
    /// Command kind for a commander name. Matching is case-insensitive.
    #[must_use]
    pub fn kind_for(name: &str) -> Option<OperatorKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "note" | "not" => Some(OperatorKind::Note),
            "effect" | "eff" => Some(OperatorKind::Effect),
            _ => None,
        }
    }

    /// Parse a `name:payload` line.
    pub fn parse(line: &str) -> Result<RoutedCommand, CommandParseError> {
        let (name, payload) = line
            .split_once(':')
            .ok_or(CommandParseError::MissingSeparator)?;
        let kind = Self::kind_for(name).ok_or_else(|| CommandParseError::UnknownCommand {
            name: name.trim().to_string(),
        })?;
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(CommandParseError::EmptyPayload {
                name: name.trim().to_string(),
            });
        }
        Ok(RoutedCommand {
            kind,
            payload: payload.to_string(),
        })
    }

    /// Parse `line` and play it on `sink`.
    pub fn dispatch<S>(line: &str, sink: &mut S) -> Result<RoutedCommand, CommandParseError>
    where
        S: CommandSink + ?Sized,
    {
        let cmd = Self::parse(line)?;
        debug!(kind = ?cmd.kind, payload = %cmd.payload, "commander dispatch");
        match cmd.kind {
            OperatorKind::Note => sink.play_note(&cmd.payload),
            OperatorKind::Effect => sink.play_effect(&cmd.payload),
        }
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Played;

    #[test]
    fn aliases_route_to_kinds() {
        assert_eq!(CommandRouter::kind_for("note"), Some(OperatorKind::Note));
        assert_eq!(CommandRouter::kind_for("not"), Some(OperatorKind::Note));
        assert_eq!(CommandRouter::kind_for("effect"), Some(OperatorKind::Effect));
        assert_eq!(CommandRouter::kind_for("EFF"), Some(OperatorKind::Effect));
        assert_eq!(CommandRouter::kind_for("play"), None);
    }

    #[test]
    fn dispatch_plays_immediately() {
        let mut sink: Vec<Played> = Vec::new();
        CommandRouter::dispatch("note:C4", &mut sink).unwrap();
        CommandRouter::dispatch("eff: 1rv", &mut sink).unwrap();
        assert_eq!(
            sink,
            vec![Played::Note("C4".into()), Played::Effect("1rv".into())]
        );
    }

    #[test]
    fn payload_keeps_inner_colons() {
        let cmd = CommandRouter::parse("note:C4:q").unwrap();
        assert_eq!(cmd.payload, "C4:q");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            CommandRouter::parse("noteC4"),
            Err(CommandParseError::MissingSeparator)
        );
        assert_eq!(
            CommandRouter::parse("bpm:120"),
            Err(CommandParseError::UnknownCommand { name: "bpm".into() })
        );
        assert_eq!(
            CommandRouter::parse("note:  "),
            Err(CommandParseError::EmptyPayload {
                name: "note".into()
            })
        );
    }

    #[test]
    fn failed_dispatch_plays_nothing() {
        let mut sink: Vec<Played> = Vec::new();
        assert!(CommandRouter::dispatch("bpm:120", &mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn error_display() {
        let err = CommandParseError::UnknownCommand { name: "bpm".into() };
        assert_eq!(err.to_string(), "unknown command `bpm`");
    }
}

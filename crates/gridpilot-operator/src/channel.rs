#![forbid(unsafe_code)]

//! Command channel: the handoff between grid evaluation and playback.
//!
//! Operators talk to a [`CommandChannel`] in two phases: `push_*` enqueues a
//! command, `run_*` drains what is pending into the synthesizer. A passive
//! (banged) operator only pushes; a forced operator pushes and runs.
//!
//! [`CommandQueue`] is the standard channel. It owns the pending commands and
//! drains them into a [`CommandSink`], the seam where the audio engine plugs in.

use gridpilot_core::debug;

/// Two-phase command handoff used by operators.
pub trait CommandChannel {
    /// Enqueue a note command.
    fn push_note(&mut self, message: &str);

    /// Drain pending note commands to playback.
    fn run_note(&mut self);

    /// Enqueue an effect command.
    fn push_effect(&mut self, message: &str);

    /// Drain pending effect commands to playback.
    fn run_effect(&mut self);
}

impl<T: CommandChannel + ?Sized> CommandChannel for &mut T {
    fn push_note(&mut self, message: &str) {
        (**self).push_note(message);
    }

    fn run_note(&mut self) {
        (**self).run_note();
    }

    fn push_effect(&mut self, message: &str) {
        (**self).push_effect(message);
    }

    fn run_effect(&mut self) {
        (**self).run_effect();
    }
}

/// Synthesizer playback. Fire-and-forget.
pub trait CommandSink {
    /// Play a note command immediately.
    fn play_note(&mut self, command: &str);

    /// Play an effect command immediately.
    fn play_effect(&mut self, command: &str);
}

/// A command that reached a [`CommandSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Played {
    Note(String),
    Effect(String),
}

/// Collects played commands in order.
impl CommandSink for Vec<Played> {
    fn play_note(&mut self, command: &str) {
        self.push(Played::Note(command.to_string()));
    }

    fn play_effect(&mut self, command: &str) {
        self.push(Played::Effect(command.to_string()));
    }
}

/// Buffered [`CommandChannel`] that drains into a [`CommandSink`].
#[derive(Debug, Clone, Default)]
pub struct CommandQueue<S> {
    sink: S,
    notes: Vec<String>,
    effects: Vec<String>,
}

impl<S: CommandSink> CommandQueue<S> {
    /// Create an empty queue in front of `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            notes: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Note commands pushed but not yet run.
    pub fn pending_notes(&self) -> &[String] {
        &self.notes
    }

    /// Whether nothing is waiting for playback.
    pub fn is_idle(&self) -> bool {
        self.notes.is_empty() && self.effects.is_empty()
    }

    /// Drain both queues, notes first. Called by the host at the end of a tick.
    pub fn flush(&mut self) {
        self.run_note();
        self.run_effect();
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the queue, dropping anything still pending.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: CommandSink> CommandChannel for CommandQueue<S> {
    fn push_note(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }

    fn run_note(&mut self) {
        if !self.notes.is_empty() {
            debug!(count = self.notes.len(), "playing pending notes");
        }
        for note in self.notes.drain(..) {
            self.sink.play_note(&note);
        }
    }

    fn push_effect(&mut self, message: &str) {
        self.effects.push(message.to_string());
    }

    fn run_effect(&mut self) {
        if !self.effects.is_empty() {
            debug!(count = self.effects.len(), "playing pending effects");
        }
        for effect in self.effects.drain(..) {
            self.sink.play_effect(&effect);
        }
    }
}

/// One call observed by a [`RecordingChannel`].
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCall {
    PushNote(String),
    RunNote,
    PushEffect(String),
    RunEffect,
}

/// [`CommandChannel`] that records every call, for tests.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    pub calls: Vec<ChannelCall>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingChannel {
    /// Whether no call was made.
    pub fn is_untouched(&self) -> bool {
        self.calls.is_empty()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl CommandChannel for RecordingChannel {
    fn push_note(&mut self, message: &str) {
        self.calls.push(ChannelCall::PushNote(message.to_string()));
    }

    fn run_note(&mut self) {
        self.calls.push(ChannelCall::RunNote);
    }

    fn push_effect(&mut self, message: &str) {
        self.calls.push(ChannelCall::PushEffect(message.to_string()));
    }

    fn run_effect(&mut self) {
        self.calls.push(ChannelCall::RunEffect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_buffers_until_run() {
        let mut queue = CommandQueue::new(Vec::<Played>::new());
        queue.push_note("C4");
        queue.push_note("E4");
        assert_eq!(queue.pending_notes(), ["C4".to_string(), "E4".to_string()]);
        assert!(queue.sink().is_empty());

        queue.run_note();
        assert!(queue.pending_notes().is_empty());
        assert_eq!(
            queue.sink(),
            &vec![Played::Note("C4".into()), Played::Note("E4".into())]
        );
    }

    #[test]
    fn note_and_effect_queues_are_independent() {
        let mut queue = CommandQueue::new(Vec::<Played>::new());
        queue.push_note("C4");
        queue.push_effect("1rv");
        queue.run_effect();
        assert_eq!(queue.sink(), &vec![Played::Effect("1rv".into())]);
        assert_eq!(queue.pending_notes(), ["C4".to_string()]);
        assert!(!queue.is_idle());
    }

    #[test]
    fn flush_plays_notes_before_effects() {
        let mut queue = CommandQueue::new(Vec::<Played>::new());
        queue.push_effect("1rv");
        queue.push_note("C4");
        queue.flush();
        assert!(queue.is_idle());
        assert_eq!(
            queue.into_sink(),
            vec![Played::Note("C4".into()), Played::Effect("1rv".into())]
        );
    }

    #[test]
    fn run_on_empty_queue_is_noop() {
        let mut queue = CommandQueue::new(Vec::<Played>::new());
        queue.run_note();
        queue.run_effect();
        assert!(queue.sink().is_empty());
    }

    #[test]
    fn mut_ref_forwards() {
        let mut rec = RecordingChannel::default();
        {
            let mut by_ref: &mut RecordingChannel = &mut rec;
            CommandChannel::push_note(&mut by_ref, "C4");
            CommandChannel::run_note(&mut by_ref);
        }
        assert_eq!(
            rec.calls,
            vec![ChannelCall::PushNote("C4".into()), ChannelCall::RunNote]
        );
    }
}

#![forbid(unsafe_code)]

//! Frame loop tying the operator host, the command queue, and the guide together.

use gridpilot_core::{GlyphBuffer, Point, debug, info};
use gridpilot_guide::{AcceleratorMap, Guide, KeyLabelPolicy};
use gridpilot_operator::{
    CommandQueue, CommandRouter, CommandSink, EmitDecision, OperatorHost, OperatorLibrary,
    RoutedCommand, TickReport,
};

use rand::Rng;

use crate::Result;
use crate::programs::EXAMPLES;

/// A grid session wired to a synthesizer sink.
///
/// Each [`frame`](Self::frame) ticks every operator, drains the queued
/// commands into the sink, and redraws the guide overlay.
///
/// ```
/// use gridpilot::{Bridge, GlyphBuffer, KeyLabelPolicy, KeyStyle, Played};
///
/// let mut grid = GlyphBuffer::from_text(".*...\n.;C4q.");
/// let mut bridge = Bridge::new(Vec::<Played>::new(), KeyLabelPolicy::new(KeyStyle::Pc));
/// bridge.frame(&mut grid);
/// assert_eq!(bridge.sink(), &[Played::Note("C4q".into())]);
/// ```
#[derive(Debug)]
pub struct Bridge<S> {
    host: OperatorHost,
    queue: CommandQueue<S>,
    guide: Guide,
    accels: AcceleratorMap,
    policy: KeyLabelPolicy,
}

impl<S: CommandSink> Bridge<S> {
    /// Standard library, bindings, and guide for `policy`.
    pub fn new(sink: S, policy: KeyLabelPolicy) -> Self {
        let library = OperatorLibrary::standard();
        let accels = AcceleratorMap::standard();
        let guide = Guide::standard(&library, &accels, &policy);
        Self {
            host: OperatorHost::new(library),
            queue: CommandQueue::new(sink),
            guide,
            accels,
            policy,
        }
    }

    pub fn host(&self) -> &OperatorHost {
        &self.host
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }

    pub fn guide_mut(&mut self) -> &mut Guide {
        &mut self.guide
    }

    pub fn accelerators(&self) -> &AcceleratorMap {
        &self.accels
    }

    pub fn policy(&self) -> &KeyLabelPolicy {
        &self.policy
    }

    pub fn sink(&self) -> &S {
        self.queue.sink()
    }

    pub fn into_sink(self) -> S {
        self.queue.into_sink()
    }

    /// Advance one frame: tick, play queued commands, redraw the guide.
    pub fn frame(&mut self, grid: &mut GlyphBuffer) -> TickReport {
        grid.clear_overlay();
        let report = self.host.tick(grid, &mut self.queue);
        self.queue.flush();
        self.guide.render(grid);
        report
    }

    /// Force the operator at `origin` to play now.
    pub fn activate(&mut self, grid: &mut GlyphBuffer, origin: Point) -> Option<EmitDecision> {
        self.host.activate(grid, &mut self.queue, origin)
    }

    /// Play a commander line such as `note:C4q` straight to the sink.
    pub fn command(&mut self, line: &str) -> Result<RoutedCommand> {
        Ok(CommandRouter::dispatch(line, self.queue.sink_mut())?)
    }

    /// Replace `grid` with a bundled example program.
    ///
    /// `pick` receives the number of examples and returns an index; values out
    /// of range wrap. A visible guide is hidden first. Returns the example name.
    pub fn load_example<F>(&mut self, grid: &mut GlyphBuffer, pick: F) -> &'static str
    where
        F: FnOnce(usize) -> usize,
    {
        if self.guide.is_visible() {
            self.toggle_guide();
        }
        let (name, program) = EXAMPLES[pick(EXAMPLES.len()) % EXAMPLES.len()];
        info!(example = name, "loading example");
        *grid = GlyphBuffer::from_text(program);
        name
    }

    /// [`load_example`](Self::load_example) with a uniformly random pick.
    pub fn load_random_example(&mut self, grid: &mut GlyphBuffer) -> &'static str {
        self.load_example(grid, |count| rand::thread_rng().gen_range(0..count))
    }

    /// Show or hide the guide; returns the new visibility.
    pub fn toggle_guide(&mut self) -> bool {
        let visible = self.guide.toggle();
        debug!(visible, "guide toggled");
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use gridpilot_core::StyleTag;
    use gridpilot_guide::KeyStyle;
    use gridpilot_operator::{CommandParseError, Played};

    fn bridge() -> Bridge<Vec<Played>> {
        Bridge::new(Vec::new(), KeyLabelPolicy::new(KeyStyle::Pc))
    }

    #[test]
    fn banged_operators_play_at_end_of_frame() {
        let mut grid = GlyphBuffer::from_text("*.....\n;C4q..\n=kick.\n*.....");
        let mut b = bridge();
        let report = b.frame(&mut grid);
        assert_eq!(report.emitted(), 2);
        assert_eq!(
            b.sink(),
            &[Played::Note("C4q".into()), Played::Effect("kick".into())]
        );
    }

    #[test]
    fn unbanged_operator_stays_silent() {
        let mut grid = GlyphBuffer::from_text(";C4q..");
        let mut b = bridge();
        b.frame(&mut grid);
        assert!(b.sink().is_empty());
        assert_eq!(b.host().frame(), 1);
    }

    #[test]
    fn activate_plays_immediately() {
        let mut grid = GlyphBuffer::from_text(";C4q..");
        let mut b = bridge();
        let decision = b.activate(&mut grid, Point::new(0, 0));
        assert_eq!(decision.and_then(|d| d.message().map(str::to_string)), Some("C4q".into()));
        assert_eq!(b.sink(), &[Played::Note("C4q".into())]);
        assert!(b.activate(&mut grid, Point::new(1, 0)).is_none());
    }

    #[test]
    fn commander_routes_to_sink() {
        let mut b = bridge();
        let cmd = b.command("eff:snare");
        assert!(cmd.is_ok());
        assert_eq!(b.sink(), &[Played::Effect("snare".into())]);
        assert!(matches!(
            b.command("bogus"),
            Err(Error::Command(CommandParseError::MissingSeparator))
        ));
    }

    #[test]
    fn load_example_hides_guide_and_replaces_grid() {
        let mut grid = GlyphBuffer::from_text("*....\n;ABC.");
        let mut b = bridge();
        b.toggle_guide();
        let name = b.load_example(&mut grid, |count| {
            assert_eq!(count, EXAMPLES.len());
            1
        });
        assert_eq!(name, EXAMPLES[1].0);
        assert!(!b.guide().is_visible());
        assert_eq!(grid.rows().join("\n"), EXAMPLES[1].1);
    }

    #[test]
    fn load_example_wraps_pick() {
        let mut grid = GlyphBuffer::new(4, 4);
        let mut b = bridge();
        let name = b.load_example(&mut grid, |count| count);
        assert_eq!(name, EXAMPLES[0].0);
        assert!(!b.guide().is_visible());
    }

    #[test]
    fn loaded_hello_example_plays() {
        let mut grid = GlyphBuffer::new(1, 1);
        let mut b = bridge();
        let idx = crate::programs::find("hello").unwrap_or(0);
        b.load_example(&mut grid, |_| idx);
        b.frame(&mut grid);
        assert_eq!(
            b.sink(),
            &[Played::Note("C4q".into()), Played::Effect("kick".into())]
        );
    }

    #[test]
    fn random_example_is_bundled() {
        let mut grid = GlyphBuffer::new(2, 2);
        let mut b = bridge();
        let name = b.load_random_example(&mut grid);
        assert!(crate::programs::find(name).is_some());
    }

    #[test]
    fn guide_overlay_follows_visibility() {
        let mut grid = GlyphBuffer::new(100, 30);
        let mut b = bridge();
        b.frame(&mut grid);
        assert!(grid.overlay_at(Point::new(2, 0)).is_none());

        assert!(b.toggle_guide());
        b.frame(&mut grid);
        assert_eq!(
            grid.overlay_at(Point::new(2, 0)).map(|(_, s)| s),
            Some(StyleTag::Heading)
        );

        assert!(!b.toggle_guide());
        b.frame(&mut grid);
        assert!(grid.overlay_at(Point::new(2, 0)).is_none());
    }
}

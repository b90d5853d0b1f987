#![forbid(unsafe_code)]

//! Print the guide overlay and one scripted frame as plain text.
//!
//! # Running
//!
//! ```sh
//! GRIDPILOT_WIDTH=120 GRIDPILOT_HEIGHT=40 cargo run -p gridpilot --bin gridpilot-dump
//! ```
//!
//! Recognized environment:
//!
//! - `GRIDPILOT_WIDTH` / `GRIDPILOT_HEIGHT`: grid size (default 100x30)
//! - `GRIDPILOT_KEY_STYLE`: `mac` or `pc`
//! - `GRIDPILOT_GLYPH_ARROWS`: render arrow keys as glyphs
//! - `GRIDPILOT_EXAMPLE`: load a bundled example by name, or `random`
//! - `GRIDPILOT_DUMP_STYLES`: also print overlay style codes
//! - `RUST_LOG`: log filter, with the `tracing` feature

use std::io::{self, Write};

use gridpilot::{Bridge, GlyphBuffer, KeyLabelPolicy, Played, Point, programs};

const ENV_WIDTH: &str = "GRIDPILOT_WIDTH";
const ENV_HEIGHT: &str = "GRIDPILOT_HEIGHT";
const ENV_EXAMPLE: &str = "GRIDPILOT_EXAMPLE";
const ENV_DUMP_STYLES: &str = "GRIDPILOT_DUMP_STYLES";
const DEFAULT_WIDTH: u16 = 100;
const DEFAULT_HEIGHT: u16 = 30;

/// A banged note and a banged effect along the bottom edge.
const SCRIPT: [(u16, &str); 4] = [(0, "*......"), (1, ";C4q..."), (2, "=kick.."), (3, "*......")];

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(matches!(
        trimmed,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    ))
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
}

fn env_dim(name: &str, default: u16) -> u16 {
    env_u64(name)
        .and_then(|v| u16::try_from(v).ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn main() -> gridpilot::Result<()> {
    init_tracing();

    let width = env_dim(ENV_WIDTH, DEFAULT_WIDTH);
    let height = env_dim(ENV_HEIGHT, DEFAULT_HEIGHT);
    let mut grid = GlyphBuffer::new(width, height);
    let base = height.saturating_sub(SCRIPT.len() as u16);
    for (dy, row) in SCRIPT {
        grid.set_glyphs(Point::new(0, base + dy), row);
    }

    let mut bridge = Bridge::new(Vec::<Played>::new(), KeyLabelPolicy::detect());
    bridge.toggle_guide();
    match env_string(ENV_EXAMPLE).as_deref() {
        None => {}
        Some("random") => {
            bridge.load_random_example(&mut grid);
        }
        Some(name) => {
            let Some(idx) = programs::find(name) else {
                eprintln!("unknown example {name:?}");
                std::process::exit(2);
            };
            bridge.load_example(&mut grid, |_| idx);
        }
    }
    let report = bridge.frame(&mut grid);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in grid.render_lines() {
        writeln!(out, "{line}")?;
    }
    if env_flag(ENV_DUMP_STYLES).unwrap_or(false) {
        writeln!(out)?;
        for line in grid.style_lines() {
            writeln!(out, "{line}")?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "frame {}: {} operators, {} emitted",
        report.frame,
        report.evaluated.len(),
        report.emitted()
    )?;
    for played in bridge.sink() {
        match played {
            Played::Note(cmd) => writeln!(out, "note   {cmd}")?,
            Played::Effect(cmd) => writeln!(out, "effect {cmd}")?,
        }
    }
    out.flush()?;
    Ok(())
}

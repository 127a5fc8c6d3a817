//! Smoke test binary for driving the workspace without a display.
//!
//! Run with: cargo run --bin smoke-test
//! Pick a screen: cargo run --bin smoke-test -- --screen 1280x720
//!
//! This exercises:
//! 1. Config and theme loading (degrades to defaults)
//! 2. Note creation and ID/title assignment
//! 3. Adjacent placement, including the screen-edge fallbacks
//! 4. Close + re-create (ID reuse)
//! 5. The window operation stream a real binding would receive

use anyhow::{bail, Context, Result};
use clap::Parser;

use stickypad::geometry::Rect;
use stickypad::logging;
use stickypad::note::NoteColor;
use stickypad::platform::headless::HeadlessPlatform;
use stickypad::workspace::{NoteOptions, Workspace};

#[derive(Parser)]
#[command(name = "smoke-test", about = "Headless stickypad workspace driver")]
struct Args {
    /// Number of notes to spawn in a chain
    #[arg(long, default_value_t = 4)]
    notes: u32,

    /// Screen size to simulate, e.g. 1920x1080
    #[arg(long, default_value = "1920x1080")]
    screen: String,
}

fn parse_screen(spec: &str) -> Result<Rect> {
    let (w, h) = spec
        .split_once('x')
        .with_context(|| format!("invalid screen spec '{}', expected WxH", spec))?;
    let width: f64 = w.trim().parse().context("screen width is not a number")?;
    let height: f64 = h.trim().parse().context("screen height is not a number")?;
    if width <= 0.0 || height <= 0.0 {
        bail!("screen dimensions must be positive, got {}x{}", width, height);
    }
    Ok(Rect::new(0.0, 0.0, width, height))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init();

    println!("=== Stickypad Smoke Test ===\n");

    println!("1. Loading config and theme...");
    let config = stickypad::config::load_config();
    let theme = stickypad::theme::load_theme();
    println!(
        "   default note geometry -> ({}, {}) {}x{}",
        config.note.x, config.note.y, config.note.width, config.note.height
    );
    println!("   default color -> {}", theme.default_color.name());
    println!();

    println!("2. Creating workspace on a {} headless screen...", args.screen);
    let screen = parse_screen(&args.screen)?;
    let platform = HeadlessPlatform::new(screen);
    let mut ws = Workspace::new(platform, config, theme);
    println!();

    println!("3. Spawning a chain of {} adjacent notes...", args.notes);
    let first = ws.create_note(NoteOptions::default());
    let mut last = first;
    for _ in 1..args.notes {
        match ws.spawn_adjacent(last) {
            Some(id) => last = id,
            None => bail!("anchor {} vanished mid-chain", last),
        }
    }
    print_notes(&ws);
    println!();

    println!("4. Closing the first note and spawning a replacement...");
    ws.close_note(first);
    let replacement = ws.spawn_adjacent(last).context("chain tail missing")?;
    ws.set_color(replacement, NoteColor::Yellow);
    ws.set_content(replacement, "new note, recycled number");
    print_notes(&ws);
    println!(
        "   replacement got ID {} -> title \"{}\"",
        replacement,
        ws.note(replacement)
            .map(|n| n.window_title())
            .unwrap_or_default()
    );
    println!();

    println!("5. Window operation stream:");
    for op in ws.platform().ops() {
        println!("   {:?}", op);
    }
    println!("\nDone. JSONL log: {}", logging::log_path().display());

    Ok(())
}

fn print_notes(ws: &Workspace<HeadlessPlatform>) {
    for note in ws.notes() {
        println!(
            "   [{}] \"{}\" {:>7} at ({}, {}) {}x{}",
            note.id,
            note.window_title(),
            note.color.name(),
            note.dimensions.x,
            note.dimensions.y,
            note.dimensions.width,
            note.dimensions.height
        );
    }
}

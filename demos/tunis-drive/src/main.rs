//! tunis-drive — simulated GPS drive through Tunis, shown on a text screen.
//!
//! Runs the motion simulator behind the same `LocationProducer` contract a
//! device would use, tracks it with `LocationTracker`, and prints one screen
//! frame per update.
//!
//! ```text
//! tunis-drive [config.json]
//! RUST_LOG=gps_sim=debug tunis-drive demos/tunis-drive/config.json
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gps_core::SimConfig;
use gps_display::{Frame, MapView, Screen, SourceKind};
use gps_sim::{SimulatedSource, SimulatorBuilder, ThreadScheduler};
use gps_source::{LocationTracker, WatchOptions};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAMES: usize = 10;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: SimConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn print_frame(n: usize, frame: &Frame) {
    println!("── frame {n} ──────────────────────────────");
    if let Some(banner) = frame.banner {
        println!("[{banner}]");
    }
    println!(
        "{}  {}",
        frame.panel.title,
        frame.panel.subtitle.as_deref().unwrap_or("waiting for position"),
    );
    for row in &frame.panel.rows {
        println!("  {:<10} {}", row.label, row.value);
    }
    println!(
        "  permission: {}  position: {}  map centre: {}",
        frame.status.permission, frame.status.position, frame.viewport.center,
    );
    if let Some(err) = &frame.status.error {
        println!("  error: {err}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    tracing::info!(origin = %config.origin, interval = %config.update_interval, seed = ?config.seed,
        "starting simulated drive");

    let interval = config.update_interval.as_duration();
    let sim = SimulatorBuilder::new(config.clone()).build()?;
    let mut source = SimulatedSource::new(sim, ThreadScheduler::default());

    // Without a timer the tracker reports the source as unavailable and the
    // screen stays on the static origin region.
    let mut tracker = LocationTracker::start(&mut source, WatchOptions::default());

    let mut screen = Screen::new(SourceKind::Simulated, config.origin)
        .with_map(MapView::new(config.origin).follow_position(true));
    screen.map_mut().on_map_ready();
    screen.panel_mut().toggle();

    for n in 0..FRAMES {
        print_frame(n, &screen.render(&tracker.view()));
        if !tracker.is_watching() {
            break;
        }
        thread::sleep(interval);
    }

    tracker.stop();
    Ok(())
}

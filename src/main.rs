//! Real-time headless run of a presentation with a scripted click schedule.
//!
//! `rotunda [presentation.toml]` loads the given options (or the built-in
//! six-node default), then clicks through every node at roughly 60 frames
//! per second, stepping physics by the measured frame time and logging
//! each transition. Set `RUST_LOG=debug` to see them.

use std::path::Path;
use std::time::Duration;

use rotunda::engine::{PresentationCommand, PresentationEngine};
use rotunda::options::Options;
use rotunda::util::frame_timing::FrameTiming;

/// Sleep between frames.
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
/// Frames to linger on an idle state before the next scripted click.
const PAUSE_FRAMES: u32 = 30;
/// Hard stop in case a custom preset never finishes.
const MAX_FRAMES: u64 = 100_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut engine = match std::env::args().nth(1) {
        Some(path) => PresentationEngine::from_file(Path::new(&path))?,
        None => PresentationEngine::new(Options::default())?,
    };

    let mut timing = FrameTiming::new();
    let mut idle = 0;
    while !engine.is_finished() && engine.frame_count() < MAX_FRAMES {
        if engine.state().accepts_click() {
            idle += 1;
            if idle >= PAUSE_FRAMES {
                idle = 0;
                engine.execute(PresentationCommand::Advance);
            }
        }
        engine.frame(timing.end_frame())?;
        std::thread::sleep(FRAME_INTERVAL);
    }

    // Let the last drop settle.
    for _ in 0..PAUSE_FRAMES * 4 {
        engine.frame(timing.end_frame())?;
        std::thread::sleep(FRAME_INTERVAL);
    }

    for visual in engine.stage().visuals() {
        log::info!(
            "{:?} '{}' at ({:.2}, {:.2}, {:.2})",
            visual.group,
            visual.label,
            visual.position.x,
            visual.position.y,
            visual.position.z
        );
    }
    let (roof, platform) = engine.stage().cord(engine.physics())?;
    log::info!(
        "platform hangs {:.2} below the roof",
        roof.distance(platform)
    );
    log::info!(
        "finished={} after {} frames ({:.0} fps)",
        engine.is_finished(),
        engine.frame_count(),
        timing.fps()
    );
    Ok(())
}

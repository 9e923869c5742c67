//! Swarmbench entry point
//!
//! Runs one benchmark window headless: null renderer, wall clock, auto-fire
//! so the collision path sees traffic. The JSON report goes to stdout;
//! everything else goes through the logger.

use std::time::{SystemTime, UNIX_EPOCH};

use swarmbench::clock::StdClock;
use swarmbench::input::ScriptedInput;
use swarmbench::render::NullRenderer;
use swarmbench::Session;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("swarmbench starting (seed {seed})");
    log::info!("stress run: spawn volume escalates until the frame rate collapses");

    let mut session = Session::new(seed, NullRenderer, StdClock::new(), ScriptedInput::new());
    session.set_auto_fire(true);

    let report = session.run_benchmark();
    log::info!(
        "run complete: {} pursuers spawned, {:.1} points, final batch size {}",
        report.total_spawned,
        report.points,
        report.final_batch_size
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to encode report: {err}"),
    }
}

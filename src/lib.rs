//! Swarmbench - a self-tuning stress benchmark dressed as a top-down shooter
//!
//! The "game" spawns ever-larger batches of pursuers at the arena edges and
//! lets a bang-bang controller resize the batches from live FPS feedback,
//! escalating load until the host saturates. Total pursuers spawned over a
//! fixed 30 second window is the score.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawn control, bench state machine)
//! - `session`: Per-frame orchestrator tying clock, input, sim and renderer together
//! - `clock`: Frame pacing and smoothed FPS measurement
//! - `render`: Renderer capability consumed by the session
//! - `input`: Input capability (events + held-key snapshot)
//! - `ui`: Clickable buttons for the pause/results overlays

pub mod clock;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;
pub mod ui;

pub use session::Session;
pub use sim::{BenchPhase, BenchReport, GameState, Rect};

/// Benchmark configuration constants
pub mod consts {
    /// Arena dimensions (pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Target frame rate (best effort, not a hard real-time guarantee)
    pub const TARGET_FPS: u32 = 60;

    /// Player square side and per-frame move speed
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Bullet radius and per-frame speed
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Pursuer square side and per-frame speed
    pub const PURSUER_SIZE: f32 = 30.0;
    pub const PURSUER_SPEED: f32 = 2.0;

    /// Length of one benchmark window (ms)
    pub const BENCH_DURATION_MS: u64 = 30_000;
    /// Interval between spawn-batch triggers (ms)
    pub const BATCH_INTERVAL_MS: u64 = 2_000;
    /// Minimum gap between controller adjustments (ms). Shorter than one
    /// frame at 60 Hz, so in practice the controller runs every frame.
    pub const ADJUST_INTERVAL_MS: u64 = 1;

    /// Controller step when the host still has slack (FPS above threshold)
    pub const BATCH_GROW_STEP: u32 = 1_000;
    /// Controller step when the host is saturated
    pub const BATCH_SHED_STEP: u32 = 450;
    /// Batch size floor
    pub const MIN_BATCH_SIZE: u32 = 1;
    /// FPS at or below this counts as saturated
    pub const FPS_SATURATION_THRESHOLD: f32 = 1.0;

    /// Points credited per pursuer spawned
    pub const POINTS_PER_SPAWN: f64 = 0.5;

    /// Auto-fire cadence in ticks (headless runs only)
    pub const AUTO_FIRE_PERIOD_TICKS: u64 = 15;
}

//! Per-frame simulation step
//!
//! Advances one frame of the benchmark: state-machine transitions first,
//! then the spawn controller, then entity movement, collisions and the
//! batch trigger. While paused only transition input is honored.

use glam::Vec2;

use super::collision::resolve_hits;
use super::state::{BenchPhase, GameState};
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pause/resume toggle; from the results screen this restarts the run
    pub toggle_pause: bool,
    /// Fire a bullet from the player toward this point
    pub fire_at: Option<Vec2>,
    /// Held movement keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Aim and fire at the nearest pursuer on a fixed cadence; used by
    /// headless runs so the collision path sees traffic
    pub auto_fire: bool,
}

/// Advance the benchmark by one frame. `now_ms` comes from the session
/// clock; `fps` is its smoothed frame-rate estimate.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64, fps: f32) {
    // Automatic end-of-window transition comes before anything else
    if state.bench.phase == BenchPhase::Running
        && state.bench.elapsed(now_ms) >= BENCH_DURATION_MS
    {
        state.bench.finish(now_ms);
        state.pursuers.clear();
        log::info!(
            "benchmark window complete: {} pursuers spawned, final batch size {}",
            state.spawn.total_spawned,
            state.spawn.batch_size
        );
    }

    // The controller only runs while the benchmark is live
    if state.bench.phase == BenchPhase::Running {
        state.spawn.adjust(now_ms, fps);
    }

    // One toggle covers pause, resume, and (from results) restart
    if input.toggle_pause {
        match state.bench.phase {
            BenchPhase::Running => state.bench.pause(now_ms),
            BenchPhase::PausedManual => state.bench.resume(now_ms),
            BenchPhase::PausedResults => {
                state.restart(now_ms);
                log::info!("benchmark restarted (seed {})", state.seed);
            }
        }
    }

    // While paused: rendering and transition input only
    if state.bench.phase != BenchPhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Player movement, clamped to the arena
    let mut delta = Vec2::ZERO;
    if input.left {
        delta.x -= PLAYER_SPEED;
    }
    if input.right {
        delta.x += PLAYER_SPEED;
    }
    if input.up {
        delta.y -= PLAYER_SPEED;
    }
    if input.down {
        delta.y += PLAYER_SPEED;
    }
    state.player.step(delta, &state.arena);

    // Firing: explicit aim wins over the auto-fire cadence
    if let Some(target) = input.fire_at {
        state.fire_bullet(target);
    } else if input.auto_fire && state.time_ticks % AUTO_FIRE_PERIOD_TICKS == 0 {
        if let Some(target) = nearest_pursuer_target(state) {
            state.fire_bullet(target);
        }
    }

    // Bullets advance; off-screen ones are culled the same tick
    for bullet in &mut state.bullets {
        bullet.update();
    }
    let arena = state.arena;
    state.bullets.retain(|b| !b.off_screen(&arena));

    // Pursuers chase the player's center
    let player_center = state.player.center();
    for pursuer in &mut state.pursuers {
        pursuer.update(player_center);
    }

    // Collisions; every kill feeds the spawn controller
    let kills = resolve_hits(&mut state.pursuers, &mut state.bullets);
    for _ in 0..kills {
        state.spawn.record_kill();
    }

    // Due batch trigger
    let due = state.spawn.take_due_batch(now_ms);
    if due > 0 {
        state.spawn_batch(due);
        log::debug!(
            "spawned batch of {due} ({} lifetime)",
            state.spawn.total_spawned
        );
    }
}

/// Center of the pursuer nearest the player, if any
fn nearest_pursuer_target(state: &GameState) -> Option<Vec2> {
    let from = state.player.center();
    state
        .pursuers
        .iter()
        .min_by(|a, b| {
            a.center()
                .distance_squared(from)
                .partial_cmp(&b.center().distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.center())
}

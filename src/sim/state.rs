//! Session state and entity types
//!
//! Everything the benchmark measures or mutates lives here: the three
//! entity kinds, the benchmark clock/state machine, and the aggregate
//! `GameState` owned by the session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::rect::Rect;
use super::spawn::SpawnState;
use crate::consts::*;

/// Arena bounds (origin top-left)
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    /// True if a point lies inside `[0,width] x [0,height]` (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// The player avatar. Invulnerable: pursuers exist to generate load, not
/// to end the run.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
}

impl Player {
    pub fn new(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(
                (arena.width - PLAYER_SIZE) / 2.0,
                (arena.height - PLAYER_SIZE) / 2.0,
            ),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Move by `delta`, then clamp so the whole square stays in the arena
    pub fn step(&mut self, delta: Vec2, arena: &Arena) {
        self.pos += delta;
        self.pos.x = self.pos.x.clamp(0.0, arena.width - PLAYER_SIZE);
        self.pos.y = self.pos.y.clamp(0.0, arena.height - PLAYER_SIZE);
    }
}

/// A bullet. Velocity is fixed at creation from the firing angle; no
/// acceleration, no friction.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * BULLET_SPEED,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Checked after `update`; a true result removes the bullet this tick
    pub fn off_screen(&self, arena: &Arena) -> bool {
        !arena.contains(self.pos)
    }

    /// Bounding square (diameter x diameter) centered on the position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, BULLET_RADIUS * 2.0, BULLET_RADIUS * 2.0)
    }
}

/// An agent spawned at the arena edge that walks straight at the player
#[derive(Debug, Clone)]
pub struct Pursuer {
    /// Top-left corner
    pub pos: Vec2,
}

impl Pursuer {
    /// Spawn at a uniformly chosen edge, uniformly offset along it. The
    /// position sits exactly one pursuer-size outside the arena on the
    /// chosen axis.
    pub fn spawn_at_edge(rng: &mut Pcg32, arena: &Arena) -> Self {
        let pos = match rng.random_range(0..4u32) {
            0 => Vec2::new(
                rng.random_range(0.0..=(arena.width - PURSUER_SIZE)),
                -PURSUER_SIZE,
            ),
            1 => Vec2::new(
                rng.random_range(0.0..=(arena.width - PURSUER_SIZE)),
                arena.height + PURSUER_SIZE,
            ),
            2 => Vec2::new(
                -PURSUER_SIZE,
                rng.random_range(0.0..=(arena.height - PURSUER_SIZE)),
            ),
            _ => Vec2::new(
                arena.width + PURSUER_SIZE,
                rng.random_range(0.0..=(arena.height - PURSUER_SIZE)),
            ),
        };
        Self { pos }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PURSUER_SIZE / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PURSUER_SIZE, PURSUER_SIZE)
    }

    /// Walk one step along the unit vector toward the player's center.
    /// A zero distance yields a zero direction: no movement that tick.
    pub fn update(&mut self, player_center: Vec2) {
        let dir = (player_center - self.center()).normalize_or_zero();
        self.pos += dir * PURSUER_SPEED;
    }
}

/// Benchmark phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchPhase {
    /// Benchmark window is live; everything updates
    Running,
    /// Manually paused mid-window; the benchmark clock is frozen
    PausedManual,
    /// The window elapsed; results are showing until a restart
    PausedResults,
}

/// Benchmark clock and state machine
#[derive(Debug, Clone)]
pub struct BenchState {
    pub phase: BenchPhase,
    /// Wall timestamp the current window started at (shifted on resume)
    pub start_ms: u64,
    /// Elapsed benchmark time captured when leaving Running
    pub elapsed_at_pause: u64,
}

impl BenchState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            phase: BenchPhase::Running,
            start_ms: now_ms,
            elapsed_at_pause: 0,
        }
    }

    /// Benchmark time elapsed, frozen while paused
    pub fn elapsed(&self, now_ms: u64) -> u64 {
        match self.phase {
            BenchPhase::Running => now_ms.saturating_sub(self.start_ms),
            _ => self.elapsed_at_pause,
        }
    }

    /// Running -> PausedManual, remembering elapsed time
    pub fn pause(&mut self, now_ms: u64) {
        self.elapsed_at_pause = self.elapsed(now_ms);
        self.phase = BenchPhase::PausedManual;
    }

    /// PausedManual -> Running; the clock resumes with no time lost or gained
    pub fn resume(&mut self, now_ms: u64) {
        self.start_ms = now_ms.saturating_sub(self.elapsed_at_pause);
        self.phase = BenchPhase::Running;
    }

    /// Running -> PausedResults at the end of the window
    pub fn finish(&mut self, now_ms: u64) {
        self.elapsed_at_pause = self.elapsed(now_ms);
        self.phase = BenchPhase::PausedResults;
    }

    /// Begin a fresh window starting now
    pub fn restart(&mut self, now_ms: u64) {
        *self = Self::new(now_ms);
    }
}

/// Result summary for one completed benchmark window
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub seed: u64,
    /// Lifetime pursuers created during the window
    pub total_spawned: u64,
    /// `total_spawned * 0.5`, independent of how many were shot down
    pub points: f64,
    /// Batch size when the window closed - the capacity boundary the
    /// controller converged to
    pub final_batch_size: u32,
    pub duration_ms: u64,
}

/// Complete session state, owned and advanced by the orchestrator
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub arena: Arena,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub pursuers: Vec<Pursuer>,
    pub spawn: SpawnState,
    pub bench: BenchState,
    /// Simulation ticks executed while Running
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let arena = Arena::default();
        Self {
            seed,
            arena,
            player: Player::new(&arena),
            bullets: Vec::new(),
            pursuers: Vec::new(),
            spawn: SpawnState::new(now_ms),
            bench: BenchState::new(now_ms),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fire a bullet from the player's center toward `target`
    pub fn fire_bullet(&mut self, target: Vec2) {
        let from = self.player.center();
        let angle = (target.y - from.y).atan2(target.x - from.x);
        self.bullets.push(Bullet::new(from, angle));
    }

    /// Create `count` pursuers at random edge positions and credit the
    /// lifetime counter
    pub fn spawn_batch(&mut self, count: u32) {
        self.pursuers.reserve(count as usize);
        for _ in 0..count {
            self.pursuers
                .push(Pursuer::spawn_at_edge(&mut self.rng, &self.arena));
        }
        self.spawn.record_spawned(count);
    }

    /// Reset for a fresh benchmark window (entered from the results screen)
    pub fn restart(&mut self, now_ms: u64) {
        self.bench.restart(now_ms);
        self.spawn.reset(now_ms);
    }

    /// Summary of the window; meaningful once the window has completed
    pub fn report(&self) -> BenchReport {
        BenchReport {
            seed: self.seed,
            total_spawned: self.spawn.total_spawned,
            points: self.spawn.total_spawned as f64 * POINTS_PER_SPAWN,
            final_batch_size: self.spawn.batch_size,
            duration_ms: self.bench.elapsed_at_pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_bullet_velocity_from_angle() {
        let b = Bullet::new(Vec2::ZERO, 0.0);
        assert_eq!(b.vel, Vec2::new(BULLET_SPEED, 0.0));

        let theta = FRAC_PI_2;
        let b = Bullet::new(Vec2::new(3.0, 4.0), theta);
        assert_eq!(
            b.vel,
            Vec2::new(theta.cos() * BULLET_SPEED, theta.sin() * BULLET_SPEED)
        );
    }

    #[test]
    fn test_bullet_off_screen_is_edge_exclusive() {
        let arena = Arena::default();
        let on_edge = Bullet::new(Vec2::new(arena.width, 300.0), 0.0);
        assert!(!on_edge.off_screen(&arena));

        let mut b = Bullet::new(Vec2::new(arena.width - 1.0, 300.0), 0.0);
        b.update(); // 10 px right, past the edge
        assert!(b.off_screen(&arena));

        let left = Bullet {
            pos: Vec2::new(-0.1, 300.0),
            vel: Vec2::ZERO,
        };
        assert!(left.off_screen(&arena));
    }

    #[test]
    fn test_player_clamped_to_arena() {
        let arena = Arena::default();
        let mut player = Player::new(&arena);

        for _ in 0..500 {
            player.step(Vec2::new(-PLAYER_SPEED, -PLAYER_SPEED), &arena);
        }
        assert_eq!(player.pos, Vec2::ZERO);

        for _ in 0..500 {
            player.step(Vec2::new(PLAYER_SPEED, PLAYER_SPEED), &arena);
        }
        assert_eq!(
            player.pos,
            Vec2::new(arena.width - PLAYER_SIZE, arena.height - PLAYER_SIZE)
        );
    }

    #[test]
    fn test_pursuer_moves_toward_player() {
        let mut p = Pursuer { pos: Vec2::ZERO };
        let target = Vec2::new(100.0 + PURSUER_SIZE / 2.0, PURSUER_SIZE / 2.0);
        p.update(target);
        // Straight along +x at exactly one step
        assert!((p.pos.x - PURSUER_SPEED).abs() < 1e-5);
        assert!(p.pos.y.abs() < 1e-5);
    }

    #[test]
    fn test_pursuer_coincident_with_player_stays_put() {
        let mut p = Pursuer {
            pos: Vec2::new(50.0, 50.0),
        };
        let center = p.center();
        p.update(center);
        assert_eq!(p.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_pause_resume_preserves_elapsed() {
        let mut bench = BenchState::new(1_000);
        // 7 s in, pause
        bench.pause(8_000);
        assert_eq!(bench.elapsed(8_000), 7_000);
        // A long wall-clock gap passes while paused
        assert_eq!(bench.elapsed(500_000), 7_000);
        bench.resume(500_000);
        assert_eq!(bench.phase, BenchPhase::Running);
        assert_eq!(bench.elapsed(500_000), 7_000);
        assert_eq!(bench.elapsed(501_000), 8_000);
    }

    #[test]
    fn test_fire_bullet_aims_at_target() {
        let mut state = GameState::new(1, 0);
        let from = state.player.center();
        state.fire_bullet(from + Vec2::new(0.0, 50.0)); // straight down
        let b = &state.bullets[0];
        assert!((b.vel.y - BULLET_SPEED).abs() < 1e-4);
        assert!(b.vel.x.abs() < 1e-4);
    }

    proptest! {
        /// Spawn positions sit exactly one pursuer-size outside the arena on
        /// exactly one axis, with the other coordinate on the edge span.
        #[test]
        fn prop_spawn_outside_on_exactly_one_axis(seed in any::<u64>()) {
            let arena = Arena::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..64 {
                let p = Pursuer::spawn_at_edge(&mut rng, &arena);
                let outside_x =
                    p.pos.x == -PURSUER_SIZE || p.pos.x == arena.width + PURSUER_SIZE;
                let outside_y =
                    p.pos.y == -PURSUER_SIZE || p.pos.y == arena.height + PURSUER_SIZE;
                prop_assert!(outside_x ^ outside_y);
                if outside_x {
                    prop_assert!(p.pos.y >= 0.0 && p.pos.y <= arena.height - PURSUER_SIZE);
                } else {
                    prop_assert!(p.pos.x >= 0.0 && p.pos.x <= arena.width - PURSUER_SIZE);
                }
            }
        }
    }
}

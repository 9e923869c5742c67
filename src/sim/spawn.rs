//! Feedback-controlled pursuer spawning
//!
//! Two timers drive the load. A coarse trigger fires a whole batch every
//! two seconds; a fine-grained bang-bang controller resizes that batch from
//! measured FPS, growing aggressively while the host has slack and shedding
//! once it saturates. Batch size oscillates near the capacity boundary,
//! which is what the benchmark is really measuring.

use crate::consts::*;

/// Spawn scheduler state. Mutated only by the controller entry points
/// below; reset when a new benchmark window begins.
#[derive(Debug, Clone)]
pub struct SpawnState {
    /// Pursuers created per batch trigger (never below `MIN_BATCH_SIZE`)
    pub batch_size: u32,
    /// Lifetime pursuers created this window
    pub total_spawned: u64,
    last_adjust_ms: u64,
    next_batch_ms: u64,
}

impl SpawnState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            batch_size: MIN_BATCH_SIZE,
            total_spawned: 0,
            last_adjust_ms: now_ms,
            next_batch_ms: now_ms + BATCH_INTERVAL_MS,
        }
    }

    /// Back to a fresh window: floor batch size, zero the counter
    pub fn reset(&mut self, now_ms: u64) {
        *self = Self::new(now_ms);
    }

    /// Bang-bang controller step. Gated to strictly more than
    /// `ADJUST_INTERVAL_MS` since the previous step; at 60 Hz the gate never
    /// throttles, so this executes once per frame. FPS above the threshold
    /// means slack (grow hard), at or below means saturation (shed, but
    /// never under the floor).
    pub fn adjust(&mut self, now_ms: u64, fps: f32) {
        if now_ms.saturating_sub(self.last_adjust_ms) <= ADJUST_INTERVAL_MS {
            return;
        }
        self.last_adjust_ms = now_ms;

        if fps > FPS_SATURATION_THRESHOLD {
            self.batch_size = self.batch_size.saturating_add(BATCH_GROW_STEP);
        } else {
            self.batch_size = self
                .batch_size
                .saturating_sub(BATCH_SHED_STEP)
                .max(MIN_BATCH_SIZE);
        }
    }

    /// Number of pursuers to create this frame: the full batch when the
    /// trigger is due, zero otherwise. Rescheduling is deadline-based, so a
    /// deadline that lapsed during a pause fires once with no catch-up.
    pub fn take_due_batch(&mut self, now_ms: u64) -> u32 {
        if now_ms < self.next_batch_ms {
            return 0;
        }
        self.next_batch_ms = now_ms + BATCH_INTERVAL_MS;
        self.batch_size
    }

    /// Each pursuer shot down feeds the load back: +1 to the batch size.
    /// This secondary signal only ever increases.
    pub fn record_kill(&mut self) {
        self.batch_size = self.batch_size.saturating_add(1);
    }

    /// Credit `count` freshly created pursuers to the lifetime counter
    pub fn record_spawned(&mut self, count: u32) {
        self.total_spawned += u64::from(count);
    }
}

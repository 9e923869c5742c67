//! Deterministic simulation module
//!
//! All benchmark logic lives here. This module must stay pure and
//! deterministic:
//! - Time and FPS are injected by the caller, never read from the host
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_hits;
pub use rect::Rect;
pub use spawn::SpawnState;
pub use state::{
    Arena, BenchPhase, BenchReport, BenchState, Bullet, GameState, Player, Pursuer,
};
pub use tick::{TickInput, tick};

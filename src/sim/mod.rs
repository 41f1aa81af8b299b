//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the frame delta passed to `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod player;
pub mod spawner;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{FailureCause, Hitbox, check_failure};
pub use player::Player;
pub use spawner::{Spawner, maintain_ground, purge_far_terrain};
pub use state::{GameEvent, GameState, Stopwatch};
pub use terrain::{Terrain, TerrainKind};
pub use tick::{TickInput, autopilot_wants_jump, tick};

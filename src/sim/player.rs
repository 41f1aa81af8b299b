//! The player-controlled bird
//!
//! Vertical motion uses a single decaying "lift force" instead of separate
//! velocity and acceleration terms. The arc it produces is what the rest of
//! the tuning (gap size, bounds, jump force) was balanced against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite and hitbox (y grows downward)
    pub pos: Vec2,
    /// Upward displacement applied per frame; negative means falling
    pub lift_force: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            lift_force: INITIAL_LIFT_FORCE,
        }
    }
}

impl Player {
    /// Decay the lift force, then move by the decayed value.
    ///
    /// The position step is one lift force per frame regardless of `dt_ms`;
    /// only the decay is time-scaled.
    pub fn update(&mut self, dt_ms: f32) {
        self.lift_force -= dt_ms * LIFT_DECAY_PER_MS;
        self.pos.y -= self.lift_force;
    }

    /// Set the lift force to the jump value. Repeated jumps do not stack.
    pub fn jump(&mut self) {
        self.lift_force = JUMP_LIFT_FORCE;
    }

    /// Back to the spawn point with the default lift force
    pub fn reset_position(&mut self) {
        self.pos = PLAYER_SPAWN;
        self.lift_force = INITIAL_LIFT_FORCE;
    }

    #[inline]
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.pos, PLAYER_HITBOX)
    }
}

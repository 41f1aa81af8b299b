//! Hitboxes and the per-frame failure query
//!
//! Everything collidable is an axis-aligned rectangle. The only subtle part
//! is the inverted obstacle, whose hitbox is built in `Terrain::hitbox`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::terrain::Terrain;
use crate::consts::{FAIL_ABOVE_Y, FAIL_BELOW_Y};

/// Axis-aligned rectangle used for overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest corner (tolerates negative sizes)
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin.min(self.origin + self.size)
    }

    /// Largest corner (tolerates negative sizes)
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin.max(self.origin + self.size)
    }

    /// Same rectangle moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.origin + offset, self.size)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Hitbox) -> bool {
        let lo = self.min().max(other.min());
        let hi = self.max().min(other.max());
        lo.x < hi.x && lo.y < hi.y
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureCause {
    /// Player hitbox overlapped an obstacle
    Obstacle,
    /// Fell below the visible field
    BelowField,
    /// Flew above the visible field
    AboveField,
}

/// Check whether the player failed this frame. Pure query, no mutation.
///
/// Obstacle hits take precedence over bounds when both apply.
pub fn check_failure(player: &Player, obstacles: &[Terrain]) -> Option<FailureCause> {
    if obstacles.iter().any(|obstacle| obstacle.check_collision(player)) {
        return Some(FailureCause::Obstacle);
    }

    let y = player.pos.y;
    if y > FAIL_BELOW_Y {
        Some(FailureCause::BelowField)
    } else if y < FAIL_ABOVE_Y {
        Some(FailureCause::AboveField)
    } else {
        None
    }
}

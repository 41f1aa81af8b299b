//! Scrolling terrain: ground tiles and obstacle halves

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::player::Player;
use crate::consts::*;

/// Terrain variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Ground tile; scrolls but never collides
    Ground,
    /// Obstacle rising from below the gap
    Upright,
    /// Obstacle hanging above the gap, drawn rotated 180° about its anchor
    Inverted,
}

/// A scrolling terrain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub kind: TerrainKind,
    /// Anchor point; the sprite's top-left before any rotation
    pub pos: Vec2,
    /// Leftward drift in pixels per millisecond
    pub drift: f32,
}

impl Terrain {
    pub fn new(kind: TerrainKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            drift: SCROLL_SPEED_PER_MS,
        }
    }

    pub fn ground(x: f32) -> Self {
        Self::new(TerrainKind::Ground, Vec2::new(x, GROUND_Y))
    }

    pub fn upright(x: f32, y: f32) -> Self {
        Self::new(TerrainKind::Upright, Vec2::new(x, y))
    }

    pub fn inverted(x: f32, y: f32) -> Self {
        Self::new(TerrainKind::Inverted, Vec2::new(x, y))
    }

    /// Pure horizontal translation
    pub fn update(&mut self, dt_ms: f32) {
        self.pos.x -= self.drift * dt_ms;
    }

    /// Collidable region, if any.
    ///
    /// The inverted sprite is rotated 180° around its anchor, so its region
    /// sits above and left of the anchor: the nominal rectangle shifted back
    /// by its full width and height.
    pub fn hitbox(&self) -> Option<Hitbox> {
        let nominal = Hitbox::new(self.pos, OBSTACLE_HITBOX);
        match self.kind {
            TerrainKind::Ground => None,
            TerrainKind::Upright => Some(nominal),
            TerrainKind::Inverted => Some(nominal.translated(-OBSTACLE_HITBOX)),
        }
    }

    pub fn check_collision(&self, player: &Player) -> bool {
        self.hitbox()
            .is_some_and(|hitbox| hitbox.intersects(&player.hitbox()))
    }
}

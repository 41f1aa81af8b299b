//! Drawable frame model
//!
//! The simulation knows nothing about drawing. Each frame the state is turned
//! into a `Frame`: an ordered list of sprites plus the score overlay, which a
//! `RenderSurface` then consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::colors;
use crate::error::ShellResult;
use crate::platform::RenderSurface;
use crate::settings::Settings;
use crate::sim::{GameState, Terrain, TerrainKind};

/// Texture references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Background,
    Bird,
    Pipe,
    Ground,
}

impl SpriteKind {
    /// Unscaled texture size in pixels
    pub fn texture_size(&self) -> Vec2 {
        match self {
            SpriteKind::Background => Vec2::new(288.0, 512.0),
            SpriteKind::Bird => Vec2::new(34.0, 24.0),
            SpriteKind::Pipe => Vec2::new(52.0, 320.0),
            SpriteKind::Ground => Vec2::new(336.0, 112.0),
        }
    }

    /// Flat fill used in place of the texture
    pub fn color(&self) -> [f32; 4] {
        match self {
            SpriteKind::Background => colors::SKY,
            SpriteKind::Bird => colors::BIRD,
            SpriteKind::Pipe => colors::PIPE,
            SpriteKind::Ground => colors::GROUND,
        }
    }
}

/// One positioned, scaled, rotated texture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Rotation origin and unrotated top-left corner
    pub pos: Vec2,
    pub scale: f32,
    /// Clockwise in screen space (y down), degrees
    pub rotation_deg: f32,
}

impl Sprite {
    pub fn new(kind: SpriteKind, pos: Vec2, scale: f32) -> Self {
        Self {
            kind,
            pos,
            scale,
            rotation_deg: 0.0,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }

    /// Corners in screen space: top-left, top-right, bottom-right, bottom-left
    /// of the unrotated sprite, each rotated about `pos`.
    pub fn corners(&self) -> [Vec2; 4] {
        let size = self.kind.texture_size() * self.scale;
        let rotation = Vec2::from_angle(self.rotation_deg.to_radians());
        [
            Vec2::ZERO,
            Vec2::new(size.x, 0.0),
            size,
            Vec2::new(0.0, size.y),
        ]
        .map(|local| self.pos + rotation.rotate(local))
    }
}

/// Text drawn on top of everything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub text: String,
    pub pos: Vec2,
    pub size: u32,
    pub color: [f32; 4],
}

/// Everything needed to draw one frame, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub sprites: Vec<Sprite>,
    pub text: TextOverlay,
}

impl Frame {
    /// Build the frame: background, obstacles, ground, player, then score
    pub fn from_state(state: &GameState, settings: &Settings) -> Self {
        let scale = settings.texture_scale;
        let mut sprites =
            Vec::with_capacity(2 + state.obstacles.len() + state.grounds.len());

        sprites.push(Sprite::new(SpriteKind::Background, Vec2::ZERO, scale));
        sprites.extend(state.obstacles.iter().map(|t| terrain_sprite(t, scale)));
        sprites.extend(state.grounds.iter().map(|t| terrain_sprite(t, scale)));
        sprites.push(Sprite::new(SpriteKind::Bird, state.player.pos, scale));

        Self {
            clear_color: settings.clear_color,
            sprites,
            text: TextOverlay {
                text: state.score.to_string(),
                pos: settings.score_text_pos,
                size: settings.score_text_size,
                color: settings.score_text_color,
            },
        }
    }

    /// Hand the frame to a surface: clear, draw, overlay, display
    pub fn present<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> ShellResult<()> {
        surface.clear(self.clear_color);
        for sprite in &self.sprites {
            surface.draw(sprite);
        }
        surface.draw_text(&self.text);
        surface.display()
    }
}

fn terrain_sprite(terrain: &Terrain, scale: f32) -> Sprite {
    match terrain.kind {
        TerrainKind::Ground => Sprite::new(SpriteKind::Ground, terrain.pos, scale),
        TerrainKind::Upright => Sprite::new(SpriteKind::Pipe, terrain.pos, scale),
        TerrainKind::Inverted => Sprite::new(SpriteKind::Pipe, terrain.pos, scale).rotated(180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order() {
        let mut state = GameState::new(1);
        state.obstacles.push(Terrain::upright(400.0, 300.0));
        state.obstacles.push(Terrain::inverted(469.0, 100.0));
        state.score = 7;

        let frame = Frame::from_state(&state, &Settings::default());
        let kinds: Vec<SpriteKind> = frame.sprites.iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![
                SpriteKind::Background,
                SpriteKind::Pipe,
                SpriteKind::Pipe,
                SpriteKind::Ground,
                SpriteKind::Bird,
            ]
        );
        assert_eq!(frame.sprites[2].rotation_deg, 180.0);
        assert_eq!(frame.sprites[4].pos, state.player.pos);
        assert_eq!(frame.text.text, "7");
        assert_eq!(frame.text.pos, Vec2::new(180.0, 50.0));
        assert_eq!(frame.text.size, 50);
    }

    #[test]
    fn test_rotated_pipe_covers_inverted_hitbox() {
        // The 180° sprite lands roughly where the inverted hitbox is
        let pipe = Terrain::inverted(469.0, 100.0);
        let sprite = terrain_sprite(&pipe, 1.33);
        let corners = sprite.corners();
        let min = corners.iter().fold(Vec2::MAX, |acc, c| acc.min(*c));
        let max = corners.iter().fold(Vec2::MIN, |acc, c| acc.max(*c));

        let hitbox = pipe.hitbox().unwrap();
        assert!((max - Vec2::new(469.0, 100.0)).abs().max_element() < 1e-3);
        assert!((min - hitbox.min()).abs().max_element() < 2.0);
    }

    #[test]
    fn test_bird_sprite_matches_hitbox() {
        let size = SpriteKind::Bird.texture_size() * 1.33;
        assert!((size - crate::consts::PLAYER_HITBOX).abs().max_element() < 0.5);
    }
}

//! Window and presentation settings
//!
//! Gameplay tuning lives in `consts` and is not configurable. Settings cover
//! how a run is presented and driven. Nothing here is read from or written
//! to disk.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::vertex::colors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Frames per second cap (0 = uncapped)
    pub frame_rate_limit: u32,

    // === Drawing ===
    /// Uniform texture scale
    pub texture_scale: f32,
    pub clear_color: [f32; 4],
    pub score_text_pos: Vec2,
    pub score_text_size: u32,
    pub score_text_color: [f32; 4],

    // === Run ===
    /// Demo mode: the game flies itself
    pub autopilot: bool,
    /// Fixed RNG seed; random per run when `None`
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            frame_rate_limit: FRAME_RATE_LIMIT,

            texture_scale: TEXTURE_SCALE,
            clear_color: colors::CLEAR,
            score_text_pos: SCORE_TEXT_POS,
            score_text_size: SCORE_TEXT_SIZE,
            score_text_color: colors::SCORE_TEXT,

            autopilot: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Preset for the windowless native run
    pub fn headless() -> Self {
        Self {
            autopilot: true,
            ..Self::default()
        }
    }

    /// Logical play-field size
    pub fn view_size(&self) -> (f32, f32) {
        (self.window_width as f32, self.window_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "Flappy Bird");
        assert_eq!((settings.window_width, settings.window_height), (380, 676));
        assert_eq!(settings.frame_rate_limit, 120);
        assert_eq!(settings.texture_scale, 1.33);
        assert!(!settings.autopilot);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_headless_preset() {
        let settings = Settings::headless();
        assert!(settings.autopilot);
        assert_eq!(settings.frame_rate_limit, FRAME_RATE_LIMIT);
    }
}

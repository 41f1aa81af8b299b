//! Windowless render surface
//!
//! Used by the native build, which has no window: frames are counted and the
//! overlay text is tracked, and the close signal is raised once a frame
//! budget is spent.

use super::RenderSurface;
use crate::error::ShellResult;
use crate::renderer::{Sprite, TextOverlay};

#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    frame_budget: u64,
    frames_displayed: u64,
    frame_rate_limit: u32,
    sprites_this_frame: usize,
    last_text: Option<String>,
}

impl HeadlessSurface {
    /// Close after `frame_budget` displayed frames
    pub fn new(frame_budget: u64) -> Self {
        Self {
            frame_budget,
            ..Default::default()
        }
    }

    pub fn frames_displayed(&self) -> u64 {
        self.frames_displayed
    }

    pub fn frame_rate_limit(&self) -> u32 {
        self.frame_rate_limit
    }

    /// Sprites drawn in the most recent frame
    pub fn sprites_last_frame(&self) -> usize {
        self.sprites_this_frame
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }
}

impl RenderSurface for HeadlessSurface {
    fn set_frame_rate_limit(&mut self, fps: u32) {
        self.frame_rate_limit = fps;
    }

    fn clear(&mut self, _color: [f32; 4]) {
        self.sprites_this_frame = 0;
    }

    fn draw(&mut self, _sprite: &Sprite) {
        self.sprites_this_frame += 1;
    }

    fn draw_text(&mut self, text: &TextOverlay) {
        if self.last_text.as_deref() != Some(text.text.as_str()) {
            log::trace!("Overlay text: {}", text.text);
            self.last_text = Some(text.text.clone());
        }
    }

    fn display(&mut self) -> ShellResult<()> {
        self.frames_displayed += 1;
        Ok(())
    }

    fn is_close_requested(&mut self) -> bool {
        self.frames_displayed >= self.frame_budget
    }
}

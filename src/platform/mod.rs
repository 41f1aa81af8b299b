//! Platform abstraction layer
//!
//! The game loop talks to the outside world through three seams:
//! - `RenderSurface`: draws a frame and reports the close signal
//! - `InputSource`: sampled key state (edge detection happens in the sim)
//! - `Clock`: elapsed milliseconds per frame

pub mod clock;
pub mod headless;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Clock, FixedClock, FrameClock, FramePacer};
pub use headless::HeadlessSurface;
pub use input::{Key, KeyboardState};

use crate::error::ShellResult;
use crate::renderer::{Sprite, TextOverlay};

/// Something that can display frames
pub trait RenderSurface {
    /// Cap the presentation rate (0 = uncapped)
    fn set_frame_rate_limit(&mut self, fps: u32);
    fn clear(&mut self, color: [f32; 4]);
    fn draw(&mut self, sprite: &Sprite);
    fn draw_text(&mut self, text: &TextOverlay);
    /// Present everything drawn since the last `clear`
    fn display(&mut self) -> ShellResult<()>;
    /// Polled once per frame; the loop stops when this turns true
    fn is_close_requested(&mut self) -> bool;
}

/// Sampled keyboard state
pub trait InputSource {
    fn is_key_held(&self, key: Key) -> bool;
}

/// Seed for runs that do not fix one
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

//! Flappy Drift - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, terrain, spawning, collisions)
//! - `app`: Per-frame orchestration between the simulation and the platform
//! - `renderer`: Drawable frame model and the WebGPU quad pipeline
//! - `platform`: Render surface, input and clock abstractions
//! - `settings`: Window and presentation settings

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{Application, RunSummary};
pub use error::{ShellError, ShellResult};
pub use settings::Settings;

/// Game configuration constants
///
/// These are hand-tuned against a millisecond frame delta. Changing the time
/// unit without rescaling every rate below changes how the game feels.
pub mod consts {
    use glam::Vec2;

    /// Window
    pub const WINDOW_TITLE: &str = "Flappy Bird";
    pub const WINDOW_WIDTH: u32 = 380;
    pub const WINDOW_HEIGHT: u32 = 676;
    pub const FRAME_RATE_LIMIT: u32 = 120;
    /// All textures are drawn at this uniform scale
    pub const TEXTURE_SCALE: f32 = 1.33;

    /// Player defaults
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);
    pub const PLAYER_HITBOX: Vec2 = Vec2::new(45.0, 32.0);
    /// Lift force on spawn and after every reset
    pub const INITIAL_LIFT_FORCE: f32 = 3.0;
    /// Lift force set (not added) by a jump
    pub const JUMP_LIFT_FORCE: f32 = 4.0;
    /// Lift force lost per millisecond
    pub const LIFT_DECAY_PER_MS: f32 = 0.01;

    /// Horizontal drift of ground and obstacles (pixels per millisecond)
    pub const SCROLL_SPEED_PER_MS: f32 = 0.1;

    /// Obstacles
    pub const OBSTACLE_HITBOX: Vec2 = Vec2::new(70.0, 425.0);
    /// Inclusive range of the upright obstacle's top edge
    pub const OBSTACLE_ANCHOR_MIN: i32 = 210;
    pub const OBSTACLE_ANCHOR_MAX: i32 = 450;
    /// Vertical offset between the upright anchor and the inverted anchor
    pub const OBSTACLE_PAIR_GAP: f32 = 200.0;
    pub const UPRIGHT_SPAWN_X: f32 = 400.0;
    pub const INVERTED_SPAWN_X: f32 = 469.0;
    /// Terrain left of this x is dropped on the next spawn
    pub const PURGE_X: f32 = -500.0;

    /// Ground strip
    pub const GROUND_Y: f32 = 550.0;
    pub const GROUND_APPEND_THRESHOLD_X: f32 = -48.0;
    pub const GROUND_APPEND_X: f32 = 336.0;

    /// Timers (milliseconds since the last restart)
    pub const SPAWN_INTERVAL_MS: f32 = 3000.0;
    pub const SCORE_INTERVAL_MS: f32 = 5000.0;

    /// Vertical play bounds; leaving them fails the run
    pub const FAIL_BELOW_Y: f32 = 520.0;
    pub const FAIL_ABOVE_Y: f32 = -100.0;

    /// Score overlay
    pub const SCORE_TEXT_POS: Vec2 = Vec2::new(180.0, 50.0);
    pub const SCORE_TEXT_SIZE: u32 = 50;
}

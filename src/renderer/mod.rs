//! Rendering module
//!
//! `frame` turns game state into an ordered sprite list; the wgpu pipeline
//! draws those sprites as flat-colored quads.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Sprite, SpriteKind, TextOverlay};
pub use pipeline::RenderState;

//! Startup and presentation errors owned by the application shell
//!
//! The simulation has no error channel; a failed run is a gameplay event.
//! Only the surrounding shell can fail, and only while acquiring or
//! presenting to its render surface.

use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("missing page element: {0}")]
    MissingElement(&'static str),

    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface present failed: {0}")]
    Present(#[from] wgpu::SurfaceError),

    #[error("platform error: {0}")]
    Platform(String),
}

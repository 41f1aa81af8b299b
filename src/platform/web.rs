//! Browser render surface
//!
//! Sprites are batched into one vertex buffer per frame and drawn through
//! the wgpu pipeline; the score overlay is a DOM element on top of the
//! canvas.

use web_sys::{Element, HtmlCanvasElement};

use super::{FramePacer, RenderSurface};
use crate::error::{ShellError, ShellResult};
use crate::renderer::shapes::sprite_quad;
use crate::renderer::vertex::Vertex;
use crate::renderer::{RenderState, Sprite, TextOverlay};
use crate::settings::Settings;

pub struct WebSurface {
    render: RenderState,
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    score_el: Element,
    last_text: Option<String>,
    pacer: FramePacer,
}

impl WebSurface {
    /// Acquire a WebGPU surface on `canvas`
    pub async fn new(
        canvas: HtmlCanvasElement,
        score_el: Element,
        settings: &Settings,
    ) -> ShellResult<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render =
            RenderState::new(surface, &adapter, width, height, settings.view_size()).await?;

        Ok(Self {
            render,
            vertices: Vec::with_capacity(64 * 6),
            clear_color: settings.clear_color,
            score_el,
            last_text: None,
            pacer: FramePacer::new(settings.frame_rate_limit),
        })
    }

    /// Frame-rate gate for the requestAnimationFrame loop
    pub fn pacer_mut(&mut self) -> &mut FramePacer {
        &mut self.pacer
    }
}

impl RenderSurface for WebSurface {
    fn set_frame_rate_limit(&mut self, fps: u32) {
        self.pacer.set_limit(fps);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn draw(&mut self, sprite: &Sprite) {
        self.vertices.extend_from_slice(&sprite_quad(sprite));
    }

    fn draw_text(&mut self, text: &TextOverlay) {
        if self.last_text.as_deref() == Some(text.text.as_str()) {
            return;
        }
        self.score_el.set_text_content(Some(&text.text));
        let [r, g, b, a] = text.color.map(|c| (c * 255.0).round() as u8);
        let style = format!(
            "position:absolute;left:{}px;top:{}px;font-size:{}px;color:rgba({},{},{},{});",
            text.pos.x, text.pos.y, text.size, r, g, b, a as f32 / 255.0
        );
        let _ = self.score_el.set_attribute("style", &style);
        self.last_text = Some(text.text.clone());
    }

    fn display(&mut self) -> ShellResult<()> {
        match self.render.render(&self.vertices, self.clear_color) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                Err(ShellError::Present(wgpu::SurfaceError::OutOfMemory))
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }

    /// Pages are closed by the browser, never by the game
    fn is_close_requested(&mut self) -> bool {
        false
    }
}

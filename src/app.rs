//! Frame orchestration
//!
//! One `Application` owns the game state for the whole process. Each frame it
//! samples input, advances the simulation, and hands the resulting frame to
//! the render surface.

use serde::{Deserialize, Serialize};

use crate::error::ShellResult;
use crate::platform::{Clock, InputSource, Key, RenderSurface, entropy_seed};
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Totals over the life of an `Application`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub simulated_ms: f64,
    pub crashes: u32,
    pub pairs_spawned: u32,
    pub best_score: u32,
    pub final_score: u32,
}

pub struct Application {
    pub state: GameState,
    pub settings: Settings,
    autopilot: bool,
    summary: RunSummary,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(entropy_seed);
        log::info!(
            "Starting run with seed {} ({}x{}, autopilot: {})",
            seed,
            settings.window_width,
            settings.window_height,
            settings.autopilot
        );

        Self {
            state: GameState::new(seed),
            autopilot: settings.autopilot,
            settings,
            summary: RunSummary {
                seed,
                ..Default::default()
            },
        }
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
    }

    /// One full frame: input, simulation, presentation
    pub fn frame<S, I>(&mut self, surface: &mut S, input: &I, dt_ms: f32) -> ShellResult<()>
    where
        S: RenderSurface + ?Sized,
        I: InputSource + ?Sized,
    {
        let tick_input = TickInput {
            jump_held: input.is_key_held(Key::Space),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &tick_input, dt_ms);
        self.record_events(dt_ms);

        Frame::from_state(&self.state, &self.settings).present(surface)
    }

    /// Blocking loop until the surface asks to close
    pub fn run<S, I, C>(&mut self, surface: &mut S, input: &I, clock: &mut C) -> ShellResult<()>
    where
        S: RenderSurface + ?Sized,
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
    {
        surface.set_frame_rate_limit(self.settings.frame_rate_limit);
        while !surface.is_close_requested() {
            let dt_ms = clock.restart();
            self.frame(surface, input, dt_ms)?;
        }
        log::info!(
            "Surface closed after {} frames (best score {})",
            self.summary.frames,
            self.summary.best_score
        );
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            final_score: self.state.score,
            ..self.summary.clone()
        }
    }

    fn record_events(&mut self, dt_ms: f32) {
        self.summary.frames += 1;
        self.summary.simulated_ms += dt_ms.max(0.0) as f64;

        for event in &self.state.events {
            match *event {
                GameEvent::Crashed { score, .. } => {
                    self.summary.crashes += 1;
                    self.summary.best_score = self.summary.best_score.max(score);
                }
                GameEvent::PairSpawned { .. } => self.summary.pairs_spawned += 1,
                GameEvent::Scored { score } => {
                    self.summary.best_score = self.summary.best_score.max(score);
                }
                GameEvent::Jumped | GameEvent::GroundAppended => {}
            }
        }
    }
}

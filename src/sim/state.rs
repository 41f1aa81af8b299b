//! Game state and core simulation types
//!
//! One owned context holds everything a run needs; `tick` is the only code
//! that mutates it frame to frame.

use serde::{Deserialize, Serialize};

use super::collision::FailureCause;
use super::player::Player;
use super::spawner::Spawner;
use super::terrain::Terrain;

/// Elapsed-time accumulator for one named interval, driven by frame deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed_ms: f32,
}

impl Stopwatch {
    pub fn advance(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
    }

    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// True once at least `interval_ms` has accumulated since the last restart
    #[inline]
    pub fn has_elapsed(&self, interval_ms: f32) -> bool {
        self.elapsed_ms >= interval_ms
    }
}

/// Things that happened during a tick (drained at the start of the next one)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// Run failed and was reset; `score` is the score before the reset
    Crashed { score: u32, cause: FailureCause },
    PairSpawned { anchor_y: f32 },
    Scored { score: u32 },
    GroundAppended,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Player,
    /// Ground tiles, oldest first
    pub grounds: Vec<Terrain>,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Terrain>,
    pub score: u32,
    /// Time since the last obstacle spawn (or reset)
    pub spawn_clock: Stopwatch,
    /// Time since the last reset; scoring starts once it passes the interval
    pub score_clock: Stopwatch,
    /// Jump key state seen on the previous tick, for edge detection
    pub jump_held: bool,
    pub spawner: Spawner,
    /// Simulation tick counter
    pub frame: u64,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: Player::default(),
            grounds: vec![Terrain::ground(0.0)],
            obstacles: Vec::new(),
            score: 0,
            spawn_clock: Stopwatch::default(),
            score_clock: Stopwatch::default(),
            jump_held: false,
            spawner: Spawner::new(seed),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Failure transition: player back to spawn, obstacles gone, timers and
    /// score restarted. The ground strip keeps scrolling untouched.
    pub fn reset_run(&mut self) {
        self.player.reset_position();
        self.obstacles.clear();
        self.spawn_clock.restart();
        self.score_clock.restart();
        self.score = 0;
    }
}

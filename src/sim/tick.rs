//! Per-frame simulation step
//!
//! The order inside `tick` matters: collisions are checked against this
//! frame's player position, and the spawn/score timers are evaluated only
//! after the reset-or-continue decision.

use super::collision::check_failure;
use super::spawner::maintain_ground;
use super::state::{GameEvent, GameState};
use super::terrain::TerrainKind;
use crate::consts::*;

/// Autopilot aims this far above the lower edge of the next gap
const AUTOPILOT_GAP_MARGIN: f32 = PLAYER_HITBOX.y + 24.0;
/// Autopilot cruising height when no obstacle is ahead
const AUTOPILOT_CRUISE_Y: f32 = 300.0;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key currently held (sampled, not an event)
    pub jump_held: bool,
    /// Demo mode - the jump key is derived from the state instead
    pub autopilot: bool,
}

/// Advance the game by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.events.clear();
    let dt = dt_ms.max(0.0);
    state.frame += 1;

    state.spawn_clock.advance(dt);
    state.score_clock.advance(dt);

    // Edge-triggered jump: fires on the press, not while held
    let held = if input.autopilot {
        autopilot_wants_jump(state)
    } else {
        input.jump_held
    };
    if held && !state.jump_held {
        state.player.jump();
        state.events.push(GameEvent::Jumped);
    }
    state.jump_held = held;

    state.player.update(dt);

    if let Some(cause) = check_failure(&state.player, &state.obstacles) {
        log::info!(
            "Crashed ({:?}) at y={:.1} with score {}",
            cause,
            state.player.pos.y,
            state.score
        );
        state.events.push(GameEvent::Crashed {
            score: state.score,
            cause,
        });
        state.reset_run();
    }

    // Ground survives resets and keeps scrolling
    for ground in &mut state.grounds {
        ground.update(dt);
    }
    if maintain_ground(&mut state.grounds) {
        state.events.push(GameEvent::GroundAppended);
    }

    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }

    if state.spawn_clock.has_elapsed(SPAWN_INTERVAL_MS) {
        state.spawn_clock.restart();
        let anchor_y = state
            .spawner
            .spawn_obstacle_pair(&mut state.obstacles, &mut state.grounds);
        log::debug!("Spawned obstacle pair at anchor y={}", anchor_y);
        state.events.push(GameEvent::PairSpawned { anchor_y });

        if state.score_clock.has_elapsed(SCORE_INTERVAL_MS) {
            state.score += 1;
            log::debug!("Score: {}", state.score);
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }
}

/// Demo-mode jump decision: press while falling below the target height.
///
/// The target sits just above the lower edge of the nearest gap still ahead
/// of the player. Because the press is only reported while falling, the key
/// is released again on the frame after a jump, so edge detection still sees
/// distinct presses.
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    let player = &state.player;

    let target_y = state
        .obstacles
        .iter()
        .filter(|o| o.kind == TerrainKind::Upright)
        .filter(|o| o.pos.x + OBSTACLE_HITBOX.x > player.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|o| o.pos.y - AUTOPILOT_GAP_MARGIN)
        .unwrap_or(AUTOPILOT_CRUISE_Y);

    player.lift_force < 0.0 && player.pos.y > target_y
}

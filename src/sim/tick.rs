//! Simulation tick
//!
//! One step of the game: pending input, obstacles, actor physics, then
//! collision detection.

use super::collision::apply_collisions;
use super::obstacles::advance_obstacles;
use super::physics::integrate;
use super::random::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::MAX_STEP_MS;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jetpack key pressed (one-shot)
    pub thrust: bool,
}

/// Advance the game state by `dt` milliseconds
///
/// Does nothing once the game is over or when `dt` is not a positive finite
/// number. Very large deltas are clamped to [`MAX_STEP_MS`].
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
    dt: f32,
) -> Vec<GameEvent> {
    if state.over {
        return Vec::new();
    }
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Skipping tick with degenerate dt {dt}");
        return Vec::new();
    }
    let dt = dt.min(MAX_STEP_MS);
    state.elapsed_ms = dt;

    let mut events = Vec::new();

    if input.thrust {
        state.actor.thrust(state.tuning.thrust_acceleration);
        events.push(GameEvent::Thrust);
    }

    events.extend(advance_obstacles(state, rng, dt));

    integrate(
        &mut state.actor,
        state.tuning.gravity,
        state.max_velocity,
        dt,
    );

    events.extend(apply_collisions(state));

    events
}

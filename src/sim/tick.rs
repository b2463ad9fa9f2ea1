//! Per-frame orchestration
//!
//! One logical tick per rendering callback, single-threaded, no suspension.
//! Components run in a fixed order; in particular the spawn region is
//! recentred on the *current* frame's observer position before anything
//! samples from it, so new entities are never placed against a stale region.

use glam::Vec2;

use super::collision::first_collision;
use super::state::{GameState, SessionPhase};

/// Input for a single tick
///
/// The movement command is the merged output of whatever devices the input
/// collaborator polls (pointer, touch, keys, tilt), already summed. The sim
/// clamps it to the unit disk and never sees individual device state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Merged 2D movement command; clamped to length <= 1
    pub movement: Vec2,
}

impl TickInput {
    /// The command constrained to the unit disk
    #[inline]
    pub fn clamped(&self) -> Vec2 {
        self.movement.clamp_length_max(1.0)
    }
}

/// Advance the session by one frame's elapsed time.
///
/// `dt` is wall-clock seconds since the previous frame and is treated as
/// legitimate elapsed time however large it is (a backgrounded tab produces
/// one big step, not a stall), unless the config opts into a clamp.
/// Terminal sessions are no-ops.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == SessionPhase::GameOver {
        return;
    }

    let dt = match state.config.max_step_seconds {
        Some(max) => dt.min(max),
        None => dt,
    };

    // 1. Difficulty from cumulative session time
    state.elapsed += dt;
    state.difficulty.update(state.elapsed);

    // 2. Observer movement from the merged command
    let command = input.clamped();
    let config = &state.config;
    let pos = &mut state.observer.pos;
    pos.x = (pos.x + command.x * config.lateral_speed * dt)
        .clamp(-config.lateral_bound, config.lateral_bound);
    pos.y = (pos.y + command.y * config.vertical_speed * dt)
        .clamp(-config.vertical_bound, config.vertical_bound);

    // 3. Camera smoothing
    state.camera.update(state.observer.pos, dt);

    // 4. Region follows this frame's observer before any sampling
    state.region.recenter(state.observer.pos);

    // 5. Hazards: advance, then time-integrated recycling
    let speed = state.difficulty.speed();
    let spawn_rate = state.difficulty.spawn_rate();
    let observer_z = state.observer.pos.z;
    state.hazards.advance(dt, speed);
    let attempts =
        state
            .hazards
            .update_spawning(dt, spawn_rate, observer_z, &state.region, &mut state.rng);
    if attempts > 0 {
        log::trace!("ran {attempts} spawn attempts at rate {spawn_rate:.2}/s");
    }

    // 6. Ambient particles under their respawn budget
    state
        .starfield
        .advance_and_recycle(dt, speed, observer_z, &state.region, &mut state.rng);

    // 7. Collision last, against fully updated positions
    if let Some(slot) = first_collision(&state.observer, &state.hazards) {
        state.phase = SessionPhase::GameOver;
        state.collided_with = Some(slot);
        log::info!(
            "collision with hazard {slot} after {:.1}s at speed {speed:.0}",
            state.elapsed
        );
    }
}

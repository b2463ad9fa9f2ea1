//! Simulation tuning
//!
//! Every gameplay tunable lives in [`SimConfig`] so a session can be
//! reproduced from a seed plus a config. Serialized as JSON; the demo
//! runner optionally loads one from disk and falls back to defaults.

use serde::{Deserialize, Serialize};

/// All simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Observer ===
    /// Collision radius of the observer
    pub observer_radius: f32,
    /// Horizontal movement speed (units/s) for a full-deflection command
    pub lateral_speed: f32,
    /// Vertical movement speed (units/s) for a full-deflection command
    pub vertical_speed: f32,
    /// Observer x is clamped to ±this
    pub lateral_bound: f32,
    /// Observer y is clamped to ±this
    pub vertical_bound: f32,

    // === Hazards ===
    /// Fixed pool size; never changes within a session
    pub hazard_count: usize,
    /// Hazard radius is drawn uniformly from this range at construction
    pub hazard_radius_min: f32,
    pub hazard_radius_max: f32,
    /// Hazards start this far behind the observer (immediately recyclable)
    pub hazard_backlog_distance: f32,
    /// Distance behind the observer past which a hazard is recycle-eligible
    pub despawn_distance: f32,

    // === Spawn region ===
    /// Box extents of the sampling volume
    pub region_width: f32,
    pub region_height: f32,
    pub region_depth: f32,
    /// Region center sits this far ahead of the observer on +z
    pub spawn_distance: f32,
    /// Cylindrical exclusion radius around the region's forward axis
    pub blind_spot_radius: f32,

    // === Difficulty ===
    pub base_speed: f32,
    pub speed_accel: f32,
    pub max_speed: f32,
    pub base_spawn_rate: f32,
    pub spawn_accel: f32,
    pub max_spawn_rate: f32,

    // === Camera ===
    pub camera_height_offset: f32,
    pub camera_follow_distance: f32,
    pub camera_look_ahead: f32,
    /// Per-second smoothing strength in (0, 1); higher converges faster
    pub camera_smoothing: f32,

    // === Ambient particles ===
    pub particle_count: usize,
    /// Particles move at `speed * particle_speed_factor`
    pub particle_speed_factor: f32,
    /// Per-frame respawn budget = floor(dt * factor * particle_count)
    pub particle_respawn_factor: f32,
    /// Over-budget expired particles are parked this far behind the observer
    pub particle_park_offset: f32,

    // === Timing ===
    /// When true the spawn accumulator subtracts consumed time instead of
    /// resetting to zero after a burst. Reset-to-zero (the default) discards
    /// the fractional remainder and runs slightly under the nominal rate.
    pub spawn_timer_carryover: bool,
    /// Optional clamp on a single frame's dt (e.g. after the app was
    /// backgrounded). None feeds elapsed time through unmodified.
    pub max_step_seconds: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            observer_radius: 10.0,
            lateral_speed: 90.0,
            vertical_speed: 60.0,
            lateral_bound: 120.0,
            vertical_bound: 70.0,

            hazard_count: 60,
            hazard_radius_min: 8.0,
            hazard_radius_max: 20.0,
            hazard_backlog_distance: 500.0,
            despawn_distance: 50.0,

            region_width: 320.0,
            region_height: 200.0,
            region_depth: 240.0,
            spawn_distance: 600.0,
            blind_spot_radius: 40.0,

            base_speed: 120.0,
            speed_accel: 3.0,
            max_speed: 420.0,
            base_spawn_rate: 0.8,
            spawn_accel: 0.05,
            max_spawn_rate: 4.0,

            camera_height_offset: 30.0,
            camera_follow_distance: 100.0,
            camera_look_ahead: 200.0,
            camera_smoothing: 0.92,

            particle_count: 600,
            particle_speed_factor: 0.5,
            particle_respawn_factor: 0.4,
            particle_park_offset: 1000.0,

            spawn_timer_carryover: false,
            max_step_seconds: None,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for writing out a template to edit)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a file, falling back to defaults on any failure
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Bad config in {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}

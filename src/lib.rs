//! Void Rush - an endless-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pooling, spawning, difficulty, collision)
//! - `config`: Data-driven tuning, serde-backed
//!
//! Rendering, asset loading, input-device polling, and audio are external
//! collaborators: the sim exposes positions/radii/rotations once per frame
//! and consumes a merged 2D movement command plus elapsed seconds.

pub mod config;
pub mod sim;

pub use config::SimConfig;

use glam::Vec3;

/// Structural constants that are not tuning knobs
pub mod consts {
    /// Upper bound on rejection-sampling retries when placing an entity
    /// outside the blind spot. On exhaustion the last-drawn point is used.
    pub const MAX_SAMPLE_ATTEMPTS: u32 = 32;

    /// Fixed demo-runner timestep (60 Hz)
    pub const DEMO_DT: f32 = 1.0 / 60.0;
}

/// Distance between two points in the horizontal (x, y) plane, ignoring depth
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Outcomes depend on elapsed time, not frame count
//! - Fixed component order within a tick
//! - No rendering or platform dependencies
//!
//! Pooled entities are constructed once per session and only ever
//! repositioned; nothing is allocated or freed while a session runs.

pub mod camera;
pub mod collision;
pub mod difficulty;
pub mod hazards;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use camera::FollowCamera;
pub use collision::{first_collision, spheres_overlap};
pub use difficulty::DifficultyScheduler;
pub use hazards::{Hazard, HazardPool, Lifecycle};
pub use particles::{AmbientParticle, ParticleField};
pub use spawn::SpawnRegion;
pub use state::{Diagnostics, GameState, Observer, SessionPhase};
pub use tick::{TickInput, tick};

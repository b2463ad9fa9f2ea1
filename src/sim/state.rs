//! Session state and core simulation types
//!
//! `GameState` owns every component for one session. All pooled entities are
//! constructed here at session start; a restart rebuilds every component from
//! a fresh seed rather than incrementally resetting anything.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::FollowCamera;
use super::difficulty::DifficultyScheduler;
use super::hazards::HazardPool;
use super::particles::ParticleField;
use super::spawn::SpawnRegion;
use crate::SimConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Ticking normally
    Running,
    /// A hazard was hit; terminal until restart
    GameOver,
}

/// The player-controlled viewpoint body
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    pub pos: Vec3,
    /// Fixed collision radius
    pub radius: f32,
}

/// Introspection snapshot for a diagnostics overlay
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    pub elapsed: f32,
    pub pool_size: usize,
    pub active_hazards: usize,
    pub eligible_hazards: usize,
    pub spawn_timer: f32,
    pub total_spawn_attempts: u64,
    pub speed: f32,
    pub spawn_rate: f32,
    pub particles_parked: usize,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, for reproducible runs
    pub seed: u64,
    pub config: SimConfig,
    pub phase: SessionPhase,
    /// Cumulative session seconds
    pub elapsed: f32,
    pub observer: Observer,
    pub difficulty: DifficultyScheduler,
    /// Single region instance shared by hazards and particles
    pub region: SpawnRegion,
    pub hazards: HazardPool,
    pub starfield: ParticleField,
    pub camera: FollowCamera,
    /// Slot of the hazard that ended the session, once terminal
    pub collided_with: Option<usize>,
    pub(super) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, config: SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let observer = Observer {
            pos: Vec3::ZERO,
            radius: config.observer_radius,
        };
        let mut region = SpawnRegion::new(
            config.region_width,
            config.region_height,
            config.region_depth,
            config.spawn_distance,
            config.blind_spot_radius,
        );
        region.recenter(observer.pos);
        let hazards = HazardPool::new(&config, &mut rng);
        let starfield = ParticleField::new(&config);
        let camera = FollowCamera::new(&config, observer.pos);
        let difficulty = DifficultyScheduler::new(&config);
        Self {
            seed,
            config,
            phase: SessionPhase::Running,
            elapsed: 0.0,
            observer,
            difficulty,
            region,
            hazards,
            starfield,
            camera,
            collided_with: None,
            rng,
        }
    }

    /// Full re-initialization after game over: every component is rebuilt.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed, self.config.clone());
        log::info!("Session restarted with seed {seed}");
    }

    /// Snapshot for an external diagnostics overlay
    pub fn diagnostics(&self) -> Diagnostics {
        let observer_z = self.observer.pos.z;
        Diagnostics {
            elapsed: self.elapsed,
            pool_size: self.hazards.len(),
            active_hazards: self.hazards.active_count(observer_z),
            eligible_hazards: self.hazards.eligible_count(observer_z),
            spawn_timer: self.hazards.spawn_timer(),
            total_spawn_attempts: self.hazards.total_attempts(),
            speed: self.difficulty.speed(),
            spawn_rate: self.difficulty.spawn_rate(),
            particles_parked: self.starfield.parked_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_running() {
        let state = GameState::new(123, SimConfig::default());
        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.collided_with, None);
        assert_eq!(state.hazards.len(), SimConfig::default().hazard_count);
        assert_eq!(state.starfield.len(), SimConfig::default().particle_count);
    }

    #[test]
    fn test_region_centered_ahead_at_start() {
        let state = GameState::new(123, SimConfig::default());
        let expected = state.observer.pos + Vec3::new(0.0, 0.0, state.config.spawn_distance);
        assert_eq!(state.region.center(), expected);
    }

    #[test]
    fn test_restart_rebuilds_everything() {
        let mut state = GameState::new(1, SimConfig::default());
        state.elapsed = 40.0;
        state.difficulty.update(40.0);
        state.phase = SessionPhase::GameOver;
        state.collided_with = Some(3);

        state.restart(2);
        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.collided_with, None);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.seed, 2);
        let config = SimConfig::default();
        assert!((state.difficulty.speed() - config.base_speed).abs() < f32::EPSILON);
    }

    #[test]
    fn test_diagnostics_snapshot() {
        let state = GameState::new(5, SimConfig::default());
        let diag = state.diagnostics();
        assert_eq!(diag.pool_size, state.hazards.len());
        assert_eq!(diag.active_hazards, 0);
        assert_eq!(diag.eligible_hazards, state.hazards.len());
        assert_eq!(diag.total_spawn_attempts, 0);
    }
}

//! Time-based difficulty
//!
//! Two independent capped integrators driven by cumulative session time:
//! relative world speed and spawn cadence. Both are pure functions of
//! elapsed seconds; the scheduler stores only the latest timestamp.

use crate::SimConfig;

/// Capped, monotonically increasing difficulty scalars
#[derive(Debug, Clone)]
pub struct DifficultyScheduler {
    base_speed: f32,
    speed_accel: f32,
    max_speed: f32,
    base_spawn_rate: f32,
    spawn_accel: f32,
    max_spawn_rate: f32,
    elapsed: f32,
}

impl DifficultyScheduler {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            base_speed: config.base_speed,
            speed_accel: config.speed_accel,
            max_speed: config.max_speed,
            base_spawn_rate: config.base_spawn_rate,
            spawn_accel: config.spawn_accel,
            max_spawn_rate: config.max_spawn_rate,
            elapsed: 0.0,
        }
    }

    /// Record cumulative session time. Time never runs backwards here, so a
    /// smaller value than previously seen is ignored.
    pub fn update(&mut self, now_seconds: f32) {
        self.elapsed = self.elapsed.max(now_seconds);
    }

    /// Back to base values (session restart)
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Current world speed (units/s)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed_at(self.elapsed)
    }

    /// Current spawn cadence (attempts/s)
    #[inline]
    pub fn spawn_rate(&self) -> f32 {
        self.spawn_rate_at(self.elapsed)
    }

    /// Speed as a pure function of elapsed seconds
    #[inline]
    pub fn speed_at(&self, t: f32) -> f32 {
        (self.base_speed + self.speed_accel * t).min(self.max_speed)
    }

    /// Spawn rate as a pure function of elapsed seconds
    #[inline]
    pub fn spawn_rate_at(&self, t: f32) -> f32 {
        (self.base_spawn_rate + self.spawn_accel * t).min(self.max_spawn_rate)
    }
}

//! Trailing viewpoint smoothing
//!
//! Exponential smoothing of a follow camera toward the observer. The raw
//! per-second smoothing constant is converted into a dt-corrected lerp weight
//! so convergence speed does not depend on frame rate: stepping 0.1s in ten
//! 0.01s slices lands on the same position as one 0.1s step.

use glam::Vec3;

use crate::SimConfig;

/// Frame-rate-independent follow camera
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Smoothed viewpoint position, persists across frames
    pub position: Vec3,
    height_offset: f32,
    follow_distance: f32,
    look_ahead: f32,
    smoothing: f32,
}

impl FollowCamera {
    pub fn new(config: &SimConfig, observer_pos: Vec3) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            height_offset: config.camera_height_offset,
            follow_distance: config.camera_follow_distance,
            look_ahead: config.camera_look_ahead,
            smoothing: config.camera_smoothing,
        };
        // Start converged so the first frames don't swing
        camera.position = camera.target_for(observer_pos);
        camera
    }

    /// Instantaneous target: above and behind the observer
    #[inline]
    pub fn target_for(&self, observer_pos: Vec3) -> Vec3 {
        observer_pos + Vec3::new(0.0, self.height_offset, -self.follow_distance)
    }

    /// Move toward the observer's follow target with a dt-corrected weight
    pub fn update(&mut self, observer_pos: Vec3, dt: f32) {
        let target = self.target_for(observer_pos);
        let weight = 1.0 - (1.0 - self.smoothing).powf(dt);
        self.position = self.position.lerp(target, weight);
    }

    /// Where the camera looks: ahead of itself down +z. Observer orientation
    /// is irrelevant, movement is purely translational.
    #[inline]
    pub fn look_target(&self) -> Vec3 {
        self.position + Vec3::new(0.0, 0.0, self.look_ahead)
    }
}

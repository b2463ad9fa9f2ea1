//! Spawn placement volume
//!
//! A box that rides ahead of the observer and hands out uniform placement
//! points, rejecting anything inside a cylindrical "blind spot" around the
//! forward axis so entities never appear at point-blank range dead ahead.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::MAX_SAMPLE_ATTEMPTS;
use crate::horizontal_distance;

/// Moving sampling volume for entity placement
///
/// Constructed once per session and shared by reference with every component
/// that places entities. Stateless apart from its center, which tracks the
/// observer via [`SpawnRegion::recenter`].
#[derive(Debug, Clone)]
pub struct SpawnRegion {
    /// Box extent on x
    pub width: f32,
    /// Box extent on y
    pub height: f32,
    /// Box extent on z
    pub depth: f32,
    /// Center sits this far ahead of the observer on +z
    pub forward_offset: f32,
    /// No sample lands closer than this to the forward axis (x, y distance)
    pub blind_spot_radius: f32,
    center: Vec3,
}

impl SpawnRegion {
    pub fn new(
        width: f32,
        height: f32,
        depth: f32,
        forward_offset: f32,
        blind_spot_radius: f32,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            forward_offset,
            blind_spot_radius,
            center: Vec3::new(0.0, 0.0, forward_offset),
        }
    }

    /// Re-center the region ahead of the observer. Must run before anything
    /// samples from the region in the same frame.
    pub fn recenter(&mut self, observer_pos: Vec3) {
        self.center = observer_pos + Vec3::new(0.0, 0.0, self.forward_offset);
    }

    /// Current region center
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Draw a placement point: uniform in the box, outside the blind spot.
    ///
    /// Rejection sampling with a retry cap. If the blind spot is degenerate
    /// (larger than the box can satisfy) the last-drawn point is returned
    /// rather than looping forever.
    pub fn sample(&self, rng: &mut Pcg32) -> Vec3 {
        let mut point = self.draw(rng);
        for _ in 1..MAX_SAMPLE_ATTEMPTS {
            if horizontal_distance(point, self.center) >= self.blind_spot_radius {
                return point;
            }
            point = self.draw(rng);
        }
        point
    }

    fn draw(&self, rng: &mut Pcg32) -> Vec3 {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let hd = self.depth / 2.0;
        self.center
            + Vec3::new(
                rng.random_range(-hw..=hw),
                rng.random_range(-hh..=hh),
                rng.random_range(-hd..=hd),
            )
    }
}

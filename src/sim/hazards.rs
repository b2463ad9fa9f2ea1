//! Pooled hazards
//!
//! A fixed population of obstacles built once per session. Hazards are never
//! created or destroyed afterwards, only advanced toward the observer and
//! recycled back into the spawn region once they fall far enough behind.
//! Spawn cadence is time-integrated so outcomes depend on elapsed seconds,
//! not frame count.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::spawn::SpawnRegion;
use crate::SimConfig;

/// Lifecycle of a pooled entity
///
/// `Offstage` covers the gap between construction and first placement; after
/// that the state is derived from position. There is no removed state: a
/// hazard stays collidable and advanceable for the whole session, whether or
/// not its visual asset ever finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed but never placed
    Offstage,
    /// In play ahead of (or around) the observer
    Active,
    /// Behind the despawn threshold, waiting to be chosen by a spawn attempt
    PendingRecycle,
}

/// A recyclable obstacle. Owned exclusively by [`HazardPool`].
#[derive(Debug, Clone)]
pub struct Hazard {
    /// Pool slot index; doubles as identity for external collaborators
    pub slot: usize,
    pub pos: Vec3,
    /// Fixed at construction
    pub radius: f32,
    /// Cosmetic tumble, radians per axis
    pub rotation: Vec3,
    /// Per-axis tumble rate (radians/s), fixed at construction
    pub spin: Vec3,
    placed: bool,
}

impl Hazard {
    /// Recycle eligibility: fallen behind the observer past the threshold
    #[inline]
    pub fn is_expired(&self, observer_z: f32, despawn_distance: f32) -> bool {
        self.pos.z < observer_z - despawn_distance
    }

    /// Current lifecycle state
    pub fn lifecycle(&self, observer_z: f32, despawn_distance: f32) -> Lifecycle {
        if !self.placed {
            Lifecycle::Offstage
        } else if self.is_expired(observer_z, despawn_distance) {
            Lifecycle::PendingRecycle
        } else {
            Lifecycle::Active
        }
    }
}

/// Fixed-capacity hazard pool with time-integrated spawn cadence
#[derive(Debug, Clone)]
pub struct HazardPool {
    hazards: Vec<Hazard>,
    despawn_distance: f32,
    spawn_timer: f32,
    carryover: bool,
    /// Total spawn attempts this session (diagnostics)
    attempts: u64,
}

impl HazardPool {
    /// Build the session's population. Every hazard starts parked far behind
    /// the observer so the pool streams in organically as cadence allows.
    pub fn new(config: &SimConfig, rng: &mut Pcg32) -> Self {
        let hazards = (0..config.hazard_count)
            .map(|slot| Hazard {
                slot,
                pos: Vec3::new(0.0, 0.0, -config.hazard_backlog_distance),
                radius: rng.random_range(config.hazard_radius_min..=config.hazard_radius_max),
                rotation: Vec3::ZERO,
                spin: Vec3::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                ),
                placed: false,
            })
            .collect();
        Self {
            hazards,
            despawn_distance: config.despawn_distance,
            spawn_timer: 0.0,
            carryover: config.spawn_timer_carryover,
            attempts: 0,
        }
    }

    /// Pool size; invariant for the session
    #[inline]
    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter()
    }

    /// Move every hazard toward the observer and advance its tumble
    pub fn advance(&mut self, dt: f32, speed: f32) {
        for hazard in &mut self.hazards {
            hazard.pos.z -= speed * dt;
            hazard.rotation += hazard.spin * dt;
        }
    }

    /// Reposition one expired hazard into the region.
    ///
    /// First eligible hazard under a linear scan; selection order is
    /// deliberately arbitrary. Returns false silently when nothing is
    /// eligible - exhaustion is a skipped attempt, not an error.
    pub fn try_spawn_one(
        &mut self,
        observer_z: f32,
        region: &SpawnRegion,
        rng: &mut Pcg32,
    ) -> bool {
        let despawn = self.despawn_distance;
        let Some(hazard) = self
            .hazards
            .iter_mut()
            .find(|h| !h.placed || h.is_expired(observer_z, despawn))
        else {
            return false;
        };
        hazard.pos = region.sample(rng);
        hazard.placed = true;
        true
    }

    /// Accumulate elapsed time and run the spawn attempts it buys.
    ///
    /// `attempts = floor(spawn_timer * spawn_rate)`; each attempt may fail
    /// independently. The default reset discards the fractional remainder;
    /// carryover mode subtracts consumed time instead. Returns the number of
    /// attempts made.
    pub fn update_spawning(
        &mut self,
        dt: f32,
        spawn_rate: f32,
        observer_z: f32,
        region: &SpawnRegion,
        rng: &mut Pcg32,
    ) -> u32 {
        self.spawn_timer += dt;
        let attempts = (self.spawn_timer * spawn_rate).floor() as u32;
        if attempts == 0 {
            return 0;
        }
        for _ in 0..attempts {
            let _ = self.try_spawn_one(observer_z, region, rng);
        }
        if self.carryover {
            self.spawn_timer -= attempts as f32 / spawn_rate;
        } else {
            self.spawn_timer = 0.0;
        }
        self.attempts += u64::from(attempts);
        attempts
    }

    /// Hazards currently in play
    pub fn active_count(&self, observer_z: f32) -> usize {
        self.hazards
            .iter()
            .filter(|h| h.lifecycle(observer_z, self.despawn_distance) == Lifecycle::Active)
            .count()
    }

    /// Hazards waiting to be recycled (includes never-placed ones)
    pub fn eligible_count(&self, observer_z: f32) -> usize {
        self.hazards
            .iter()
            .filter(|h| !h.placed || h.is_expired(observer_z, self.despawn_distance))
            .count()
    }

    /// Current accumulator value (diagnostics)
    #[inline]
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Total attempts this session (diagnostics)
    #[inline]
    pub fn total_attempts(&self) -> u64 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn setup(count: usize) -> (HazardPool, SpawnRegion, Pcg32) {
        let config = SimConfig {
            hazard_count: count,
            ..SimConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let pool = HazardPool::new(&config, &mut rng);
        let mut region = SpawnRegion::new(320.0, 200.0, 240.0, 600.0, 40.0);
        region.recenter(Vec3::ZERO);
        (pool, region, rng)
    }

    #[test]
    fn test_all_eligible_at_construction() {
        // Pool seeded 500 behind an observer at z=0 with despawn 50:
        // everything is immediately recyclable
        let (pool, _, _) = setup(10);
        assert_eq!(pool.eligible_count(0.0), 10);
        assert_eq!(pool.active_count(0.0), 0);
        for h in pool.iter() {
            assert_eq!(h.lifecycle(0.0, 50.0), Lifecycle::Offstage);
        }
    }

    #[test]
    fn test_pool_size_invariant() {
        let (mut pool, region, mut rng) = setup(10);
        for _ in 0..500 {
            pool.advance(0.016, 200.0);
            pool.update_spawning(0.016, 4.0, 0.0, &region, &mut rng);
        }
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn test_lifecycle_partition_is_exhaustive() {
        let (mut pool, region, mut rng) = setup(20);
        for _ in 0..300 {
            pool.advance(0.02, 300.0);
            pool.update_spawning(0.02, 4.0, 0.0, &region, &mut rng);
        }
        // Every hazard is in exactly one lifecycle state, and the Active ones
        // are exactly those ahead of the despawn threshold
        let mut offstage = 0;
        let mut active = 0;
        let mut pending = 0;
        for h in pool.iter() {
            match h.lifecycle(0.0, 50.0) {
                Lifecycle::Offstage => offstage += 1,
                Lifecycle::Active => {
                    assert!(h.pos.z >= -50.0);
                    active += 1;
                }
                Lifecycle::PendingRecycle => {
                    assert!(h.is_expired(0.0, 50.0));
                    pending += 1;
                }
            }
        }
        assert_eq!(offstage + active + pending, pool.len());
        assert_eq!(pool.active_count(0.0), active);
        assert_eq!(pool.eligible_count(0.0), offstage + pending);
    }

    #[test]
    fn test_spawned_hazards_land_in_region_outside_blind_spot() {
        let (mut pool, region, mut rng) = setup(5);
        for _ in 0..5 {
            assert!(pool.try_spawn_one(0.0, &region, &mut rng));
        }
        for h in pool.iter() {
            let d = h.pos - region.center();
            assert!(d.x.abs() <= 160.0 + 1e-3);
            assert!(d.y.abs() <= 100.0 + 1e-3);
            assert!(d.z.abs() <= 120.0 + 1e-3);
            assert!(crate::horizontal_distance(h.pos, region.center()) >= 40.0);
            assert_eq!(h.lifecycle(0.0, 50.0), Lifecycle::Active);
        }
    }

    #[test]
    fn test_spawn_fails_silently_when_none_eligible() {
        let (mut pool, region, mut rng) = setup(3);
        for _ in 0..3 {
            assert!(pool.try_spawn_one(0.0, &region, &mut rng));
        }
        // All three are now active ahead of the observer
        assert!(!pool.try_spawn_one(0.0, &region, &mut rng));
    }

    #[test]
    fn test_cadence_discard_reset_rate() {
        // 10 attempts/s over 1.0s in 20 steps of 0.05: floor-based cadence
        // with discard reset still lands exactly 10 attempts here
        let (mut pool, region, mut rng) = setup(1);
        let mut total = 0;
        for _ in 0..20 {
            total += pool.update_spawning(0.05, 10.0, 0.0, &region, &mut rng);
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn test_cadence_carryover_matches_one_big_step() {
        let config = SimConfig {
            hazard_count: 1,
            spawn_timer_carryover: true,
            ..SimConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let mut many = HazardPool::new(&config, &mut rng);
        let mut one = HazardPool::new(&config, &mut rng);
        let mut region = SpawnRegion::new(320.0, 200.0, 240.0, 600.0, 40.0);
        region.recenter(Vec3::ZERO);

        let mut total_many = 0;
        for _ in 0..40 {
            total_many += many.update_spawning(0.025, 7.0, 0.0, &region, &mut rng);
        }
        let total_one = one.update_spawning(1.0, 7.0, 0.0, &region, &mut rng);
        // Same elapsed time, attempt counts within truncation drift
        assert!((i64::from(total_many) - i64::from(total_one)).abs() <= 1);
    }

    #[test]
    fn test_advance_moves_everything_back() {
        let (mut pool, region, mut rng) = setup(4);
        for _ in 0..4 {
            pool.try_spawn_one(0.0, &region, &mut rng);
        }
        let before: Vec<f32> = pool.iter().map(|h| h.pos.z).collect();
        pool.advance(0.5, 100.0);
        for (h, z0) in pool.iter().zip(before) {
            assert!((h.pos.z - (z0 - 50.0)).abs() < 1e-3);
        }
    }
}

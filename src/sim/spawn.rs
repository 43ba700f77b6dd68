//! Time-based enemy spawner
//!
//! Spawns are frame-counted: an enemy enters whenever the frame counter lands
//! on the current interval, and each spawn after the opening one shortens the
//! interval toward a floor, ramping difficulty over the session.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyConfig};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    interval: u64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            interval: SPAWN_INTERVAL_START,
        }
    }

    /// Ticks between spawns right now
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Produce a new enemy when `frame` lands on the current interval.
    ///
    /// The lateral offset is drawn uniformly from the fixed world-space range
    /// centered on x = 0. The opening spawn at frame 0 does not consume an
    /// interval step, so the second spawn arrives a full starting interval
    /// later.
    pub fn maybe_spawn(&mut self, frame: u64, rng: &mut Pcg32) -> Option<Body> {
        if frame % self.interval != 0 {
            return None;
        }
        if frame > 0 {
            self.interval = self
                .interval
                .saturating_sub(SPAWN_INTERVAL_STEP)
                .max(SPAWN_INTERVAL_FLOOR);
        }

        let half = SPAWN_LATERAL_RANGE / 2.0;
        let lateral_x = rng.random_range(-half..half);
        match BodyConfig::enemy(lateral_x).build() {
            Ok(enemy) => {
                log::debug!(
                    "spawned enemy at x={lateral_x:.2} (frame {frame}, next interval {})",
                    self.interval
                );
                Some(enemy)
            }
            Err(err) => {
                log::error!("enemy spawn rejected: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn opening_spawn_keeps_the_starting_interval() {
        let mut spawner = Spawner::new();
        let mut rng = test_rng();

        assert!(spawner.maybe_spawn(0, &mut rng).is_some());
        assert_eq!(spawner.interval(), SPAWN_INTERVAL_START);

        for frame in 1..SPAWN_INTERVAL_START {
            assert!(spawner.maybe_spawn(frame, &mut rng).is_none());
        }

        assert!(spawner.maybe_spawn(SPAWN_INTERVAL_START, &mut rng).is_some());
        assert_eq!(spawner.interval(), SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP);
    }

    #[test]
    fn spawn_cadence_follows_the_shrinking_interval() {
        let mut spawner = Spawner::new();
        let mut rng = test_rng();

        let spawn_frames: Vec<u64> = (0..=480)
            .filter(|&frame| spawner.maybe_spawn(frame, &mut rng).is_some())
            .collect();
        assert_eq!(spawn_frames, vec![0, 200, 360, 480]);
        assert_eq!(spawner.interval(), 140);
    }

    #[test]
    fn interval_never_drops_below_the_floor() {
        let mut spawner = Spawner::new();
        let mut rng = test_rng();

        for frame in 0..100_000u64 {
            spawner.maybe_spawn(frame, &mut rng);
            assert!(spawner.interval() >= SPAWN_INTERVAL_FLOOR);
        }
        assert_eq!(spawner.interval(), SPAWN_INTERVAL_FLOOR);
    }

    #[test]
    fn spawned_enemies_match_the_enemy_profile() {
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let enemy = Spawner::new().maybe_spawn(0, &mut rng).unwrap();

            let half = SPAWN_LATERAL_RANGE / 2.0;
            assert!(enemy.pos.x >= -half && enemy.pos.x < half);
            assert_eq!(enemy.pos.y, 0.0);
            assert_eq!(enemy.pos.z, ENEMY_SPAWN_DEPTH);
            assert_eq!(enemy.vel, ENEMY_START_VELOCITY);
            assert!(enemy.forward_accel);
        }
    }
}

//! Game state and host-facing report types
//!
//! The [`World`] owns every piece of mutable simulation state; nothing is
//! ambient. Hosts read body transforms straight off the public fields after
//! each tick (positions change, sizes never do).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyConfig, BodyError};
use super::spawn::Spawner;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally
    Running,
    /// Terminal: an enemy reached the player; the world is frozen
    GameOver,
}

/// Per-tick output contract for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub score: u64,
    pub phase: GamePhase,
    /// True exactly once, on the tick the run ended; `score` then carries the
    /// final score
    pub just_ended: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Tick counter; wraps at u64 overflow
    pub frames: u64,
    pub player: Body,
    /// Static slab the player and enemies bounce on
    pub ground: Body,
    /// Live enemies in spawn order
    pub enemies: Vec<Body>,
    pub spawner: Spawner,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a fresh world seeded for a reproducible run
    pub fn new(seed: u64) -> Result<Self, BodyError> {
        Ok(Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            frames: 0,
            player: BodyConfig::player().build()?,
            ground: BodyConfig::ground().build()?,
            enemies: Vec::new(),
            spawner: Spawner::new(),
            rng: Pcg32::seed_from_u64(seed),
        })
    }
}

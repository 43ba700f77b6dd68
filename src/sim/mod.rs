//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-counted discrete time, fixed per-tick constants
//! - Seeded RNG only
//! - Stable iteration order (enemies in spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, BodyConfig, BodyError, Faces};
pub use collision::overlaps;
pub use spawn::Spawner;
pub use state::{GamePhase, TickReport, World};
pub use tick::{TickInput, tick};

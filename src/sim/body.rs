//! Body geometry and per-tick physics integration
//!
//! Every simulated entity is an axis-aligned rectangular prism. Face
//! coordinates are cached and synced at fixed points in the tick so the
//! collision detector always reads the coordinates the integrator intends.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::overlaps;
use crate::consts::*;

/// Rejected body configuration. These indicate a bug in the caller, not a
/// runtime condition to recover from: every config field is internally
/// generated.
#[derive(Debug, Error, PartialEq)]
pub enum BodyError {
    #[error("body size must be positive and finite, got {0}")]
    InvalidSize(Vec3),
    #[error("body {0} must be finite")]
    NonFinite(&'static str),
    #[error("bounce friction must lie in [0, 1], got {0}")]
    FrictionOutOfRange(f32),
}

/// Axis-aligned face coordinates, derived from position and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Faces {
    pub bottom: f32,
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub back: f32,
    pub front: f32,
}

impl Faces {
    fn of(pos: Vec3, size: Vec3) -> Self {
        let half = size / 2.0;
        Self {
            bottom: pos.y - half.y,
            top: pos.y + half.y,
            left: pos.x - half.x,
            right: pos.x + half.x,
            back: pos.z - half.z,
            front: pos.z + half.z,
        }
    }
}

/// Construction parameters for one body
///
/// Use the per-kind constructors and validate with [`BodyConfig::build`];
/// every field is explicit, nothing is defaulted behind the caller's back.
#[derive(Debug, Clone, Copy)]
pub struct BodyConfig {
    pub size: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    pub gravity: f32,
    pub friction: f32,
    /// Continuous forward (z) acceleration, used by enemies
    pub forward_accel: bool,
}

impl BodyConfig {
    /// The player cube, dropped onto the ground at the origin
    pub fn player() -> Self {
        Self {
            size: PLAYER_SIZE,
            position: PLAYER_START_POSITION,
            velocity: PLAYER_START_VELOCITY,
            gravity: GRAVITY,
            friction: BOUNCE_FRICTION,
            forward_accel: false,
        }
    }

    /// The static ground slab
    pub fn ground() -> Self {
        Self {
            size: GROUND_SIZE,
            position: GROUND_POSITION,
            velocity: Vec3::ZERO,
            gravity: GRAVITY,
            friction: BOUNCE_FRICTION,
            forward_accel: false,
        }
    }

    /// An enemy cube entering at the far end of the track
    pub fn enemy(lateral_x: f32) -> Self {
        Self {
            size: ENEMY_SIZE,
            position: Vec3::new(lateral_x, 0.0, ENEMY_SPAWN_DEPTH),
            velocity: ENEMY_START_VELOCITY,
            gravity: GRAVITY,
            friction: BOUNCE_FRICTION,
            forward_accel: true,
        }
    }

    /// Validate and construct the body, with faces synced to the start
    /// position
    pub fn build(self) -> Result<Body, BodyError> {
        if !self.size.is_finite() || self.size.min_element() <= 0.0 {
            return Err(BodyError::InvalidSize(self.size));
        }
        if !self.position.is_finite() {
            return Err(BodyError::NonFinite("position"));
        }
        if !self.velocity.is_finite() {
            return Err(BodyError::NonFinite("velocity"));
        }
        if !self.gravity.is_finite() {
            return Err(BodyError::NonFinite("gravity"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(BodyError::FrictionOutOfRange(self.friction));
        }
        Ok(Body {
            size: self.size,
            pos: self.position,
            vel: self.velocity,
            gravity: self.gravity,
            friction: self.friction,
            forward_accel: self.forward_accel,
            faces: Faces::of(self.position, self.size),
        })
    }
}

/// A rectangular prism with position, velocity and cached face coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Width, height, depth - immutable after construction
    pub size: Vec3,
    pub pos: Vec3,
    pub vel: Vec3,
    pub gravity: f32,
    pub friction: f32,
    pub forward_accel: bool,
    faces: Faces,
}

impl Body {
    /// Current cached face coordinates
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Recompute face coordinates from the current position
    pub fn sync_faces(&mut self) {
        self.faces = Faces::of(self.pos, self.size);
    }

    /// Advance this body one tick against the ground.
    ///
    /// Faces are synced before the horizontal move, so the ground test reads
    /// the pre-move coordinates; the vertical lookahead inside [`overlaps`]
    /// catches the ground contact before the position update commits, which
    /// keeps the body from tunneling through the slab.
    pub fn integrate(&mut self, ground: &Body) {
        self.sync_faces();

        if self.forward_accel {
            self.vel.z += FORWARD_ACCEL;
        }

        // Horizontal motion has no collision response
        self.pos.x += self.vel.x;
        self.pos.z += self.vel.z;

        self.vel.y -= self.gravity;
        if overlaps(self, ground) {
            // Inelastic bounce: hold position, invert and decay the velocity
            self.vel.y = -(self.vel.y * self.friction);
        } else {
            self.pos.y += self.vel.y;
        }
    }
}

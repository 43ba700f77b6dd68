//! Cube Dodge - a 3D obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, AABB collision, spawning, game state)
//!
//! Rendering, windowing and input capture are host concerns: the host calls
//! [`sim::tick`] once per display frame with an input snapshot and reads body
//! transforms back out of the [`sim::World`]. The `cube-dodge` binary is a
//! headless reference host.

pub mod sim;

pub use sim::{GamePhase, TickInput, TickReport, World};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Per-tick downward acceleration applied to every dynamic body
    pub const GRAVITY: f32 = 0.002;
    /// Velocity retained through a ground bounce (inelastic)
    pub const BOUNCE_FRICTION: f32 = 0.5;

    /// Player cube
    pub const PLAYER_SIZE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const PLAYER_START_POSITION: Vec3 = Vec3::ZERO;
    /// Player starts mid-fall onto the ground
    pub const PLAYER_START_VELOCITY: Vec3 = Vec3::new(0.0, -0.02, 0.0);
    /// Horizontal speed while a direction key is held
    pub const PLAYER_MOVE_SPEED: f32 = 0.05;
    /// Upward impulse applied on jump
    pub const JUMP_VELOCITY: f32 = 0.1;
    /// Jump is only actionable below this height (at ground rest)
    pub const JUMP_REST_EPSILON: f32 = 0.001;

    /// Ground slab the player and enemies bounce on
    pub const GROUND_SIZE: Vec3 = Vec3::new(10.0, 0.5, 50.0);
    pub const GROUND_POSITION: Vec3 = Vec3::new(0.0, -2.0, 0.0);

    /// Enemy cubes
    pub const ENEMY_SIZE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    /// Enemies drop in from this z, far side of the track
    pub const ENEMY_SPAWN_DEPTH: f32 = -20.0;
    /// Slow fall plus a constant drift toward the player
    pub const ENEMY_START_VELOCITY: Vec3 = Vec3::new(0.0, -0.02, 0.01);
    /// Per-tick forward speed-up for bodies with the acceleration flag
    pub const FORWARD_ACCEL: f32 = 0.0003;

    /// Ticks between enemy spawns at session start
    pub const SPAWN_INTERVAL_START: u64 = 200;
    /// Interval reduction per spawn (difficulty ramp)
    pub const SPAWN_INTERVAL_STEP: u64 = 20;
    /// Interval never drops below this
    pub const SPAWN_INTERVAL_FLOOR: u64 = 20;
    /// Full width of the uniform lateral spawn range, centered on x = 0
    pub const SPAWN_LATERAL_RANGE: f32 = 10.0;
}

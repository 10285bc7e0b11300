//! Gapwing - a gravity-and-gap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Session pump wiring the sim to its host collaborators
//! - `host`: Render/notification sink traits implemented by front ends
//! - `store`: Persistent key-value storage for the high score
//! - `config`: Validated gameplay constants

pub mod config;
pub mod highscore;
pub mod host;
pub mod session;
pub mod sim;
pub mod store;

pub use config::{Config, ConfigError};
pub use highscore::HighScore;
pub use session::GameSession;

/// Default gameplay constants
pub mod consts {
    /// Fixed motion tick period in milliseconds
    pub const TICK_MS: u64 = 20;
    /// Gate spawn period in milliseconds (decoupled from the motion tick)
    pub const SPAWN_PERIOD_MS: u64 = 1500;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - the player falls at a fixed horizontal position
    pub const PLAYER_X: f32 = 60.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_Y: f32 = 250.0;

    /// Downward acceleration added to velocity each tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by an impulse (negative is upward; overwrite, not additive)
    pub const IMPULSE: f32 = -10.0;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 60.0;
    pub const GAP_SIZE: f32 = 150.0;
    /// Valid range for the randomized bottom edge of a gate's top rectangle
    pub const GAP_TOP_MIN: f32 = 100.0;
    pub const GAP_TOP_MAX: f32 = 400.0;
    /// Leftward distance a gate moves per tick
    pub const GATE_STEP: f32 = 2.0;
    /// Gates spawn at the right edge of the playfield
    pub const SPAWN_X: f32 = PLAYFIELD_WIDTH;
    /// Gates are retired once x falls below this
    pub const RETIRE_THRESHOLD: f32 = -60.0;

    /// Rectangles shrink by this much on every side before the overlap test
    pub const COLLISION_BUFFER: f32 = 2.0;
}

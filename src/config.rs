//! Gameplay configuration
//!
//! All tunable constants live here. Values are fixed for the lifetime of a
//! session; `validate` rejects impossible combinations up front so bad
//! constants fail at startup, not mid-round.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// A configuration the game cannot run with
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick and spawn periods must be non-zero")]
    ZeroPeriod,
    #[error("gravity must be positive, got {0}")]
    NonPositiveGravity(f32),
    #[error("impulse must be negative (upward), got {0}")]
    NonNegativeImpulse(f32),
    #[error("gap range is empty: min {min} is not below max {max}")]
    EmptyGapRange { min: f32, max: f32 },
    #[error("gap cannot fit the playfield: {gap_top_max} + {gap_size} exceeds {playfield_height}")]
    GapExceedsPlayfield {
        gap_top_max: f32,
        gap_size: f32,
        playfield_height: f32,
    },
    #[error("gate step must be positive, got {0}")]
    NonPositiveGateStep(f32),
    #[error("player does not fit inside the playfield")]
    PlayerOutOfBounds,
}

/// Gameplay constants for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Motion tick period in milliseconds
    pub tick_ms: u64,
    /// Gate spawn period in milliseconds
    pub spawn_period_ms: u64,

    /// Playfield width
    pub playfield_width: f32,
    /// Playfield height; the player's bottom edge reaching it ends the round
    pub playfield_height: f32,

    /// Fixed horizontal position of the player's left edge
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Vertical position the player starts (and resets) at
    pub player_start_y: f32,

    /// Velocity gained per tick
    pub gravity: f32,
    /// Velocity an impulse overwrites to (negative is upward)
    pub impulse: f32,

    /// Horizontal extent of a gate's rectangles
    pub gate_width: f32,
    /// Vertical opening between a gate's top and bottom rectangles
    pub gap_size: f32,
    /// Randomized gap_top range
    pub gap_top_min: f32,
    pub gap_top_max: f32,
    /// Leftward distance a gate moves per tick
    pub gate_step: f32,
    /// Horizontal position gates spawn at
    pub spawn_x: f32,
    /// Gates are removed once x falls below this
    pub retire_threshold: f32,

    /// Inward shrink applied to every rectangle before the overlap test
    pub collision_buffer: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: consts::TICK_MS,
            spawn_period_ms: consts::SPAWN_PERIOD_MS,
            playfield_width: consts::PLAYFIELD_WIDTH,
            playfield_height: consts::PLAYFIELD_HEIGHT,
            player_x: consts::PLAYER_X,
            player_width: consts::PLAYER_WIDTH,
            player_height: consts::PLAYER_HEIGHT,
            player_start_y: consts::PLAYER_START_Y,
            gravity: consts::GRAVITY,
            impulse: consts::IMPULSE,
            gate_width: consts::GATE_WIDTH,
            gap_size: consts::GAP_SIZE,
            gap_top_min: consts::GAP_TOP_MIN,
            gap_top_max: consts::GAP_TOP_MAX,
            gate_step: consts::GATE_STEP,
            spawn_x: consts::SPAWN_X,
            retire_threshold: consts::RETIRE_THRESHOLD,
            collision_buffer: consts::COLLISION_BUFFER,
        }
    }
}

impl Config {
    /// Check the invariants the sim relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 || self.spawn_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravity));
        }
        if self.impulse >= 0.0 {
            return Err(ConfigError::NonNegativeImpulse(self.impulse));
        }
        if self.gap_top_min >= self.gap_top_max {
            return Err(ConfigError::EmptyGapRange {
                min: self.gap_top_min,
                max: self.gap_top_max,
            });
        }
        if self.gap_top_max + self.gap_size > self.playfield_height {
            return Err(ConfigError::GapExceedsPlayfield {
                gap_top_max: self.gap_top_max,
                gap_size: self.gap_size,
                playfield_height: self.playfield_height,
            });
        }
        if self.gate_step <= 0.0 {
            return Err(ConfigError::NonPositiveGateStep(self.gate_step));
        }
        if self.player_height >= self.playfield_height
            || self.player_start_y + self.player_height > self.playfield_height
        {
            return Err(ConfigError::PlayerOutOfBounds);
        }
        Ok(())
    }

    /// Vertical position at which the player's bottom edge touches the floor
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.playfield_height - self.player_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_gap_must_fit_playfield() {
        let cfg = Config {
            gap_top_max: 500.0,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::GapExceedsPlayfield {
                gap_top_max: 500.0,
                gap_size: cfg.gap_size,
                playfield_height: cfg.playfield_height,
            })
        );
    }

    #[test]
    fn test_gap_range_must_be_nonempty() {
        let cfg = Config {
            gap_top_min: 300.0,
            gap_top_max: 300.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptyGapRange { .. })
        ));
    }

    #[test]
    fn test_impulse_must_point_up() {
        let cfg = Config {
            impulse: 10.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonNegativeImpulse(10.0)));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let cfg = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn test_floor_y() {
        let cfg = Config::default();
        assert_eq!(cfg.floor_y(), cfg.playfield_height - cfg.player_height);
    }
}

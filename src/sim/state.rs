//! Game state and core simulation types
//!
//! Everything the sim mutates lives here; all of it is serializable and
//! deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Round over; terminal until the session resets
    Ended,
}

/// The player-controlled falling entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position of the top edge
    pub y: f32,
    /// Vertical velocity (positive is downward)
    pub vy: f32,
}

impl Player {
    pub fn new(cfg: &Config) -> Self {
        Self {
            y: cfg.player_start_y,
            vy: 0.0,
        }
    }
}

/// One top/bottom obstacle pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatePair {
    pub id: u32,
    /// Horizontal position of the leading (left) edge
    pub x: f32,
    /// Bottom of the top rectangle; the gap spans [gap_top, gap_top + gap_size]
    pub gap_top: f32,
    /// Set once the pair has been counted for scoring
    pub scored: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap RNG, advanced once per spawn
    rng: Pcg32,
    /// Gates cleared this round
    pub score: u32,
    /// Simulation clock in milliseconds
    pub time_ms: u64,
    /// Next spawn deadline on the simulation clock
    pub next_spawn_at: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player entity
    pub player: Player,
    /// Active gates (ordered by id for determinism)
    pub gates: Vec<GatePair>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, cfg: &Config) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ms: 0,
            next_spawn_at: cfg.spawn_period_ms,
            phase: GamePhase::Running,
            player: Player::new(cfg),
            gates: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Draw the next gap position uniformly from the configured range
    pub(crate) fn next_gap_top(&mut self, cfg: &Config) -> f32 {
        self.rng.random_range(cfg.gap_top_min..=cfg.gap_top_max)
    }

    /// Running -> Ended, exactly once. Returns false when already Ended so a
    /// second collision in the same tick cannot re-fire teardown.
    pub fn end_game(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Ended;
            true
        } else {
            false
        }
    }

    /// Restore the player, clear all gates, zero the score, resume Running.
    /// The only mutation permitted while Ended.
    pub fn reset(&mut self, cfg: &Config) {
        self.player = Player::new(cfg);
        self.gates.clear();
        self.score = 0;
        self.next_spawn_at = self.time_ms + cfg.spawn_period_ms;
        self.phase = GamePhase::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_running() {
        let cfg = Config::default();
        let state = GameState::new(7, &cfg);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.y, cfg.player_start_y);
        assert_eq!(state.player.vy, 0.0);
        assert!(state.gates.is_empty());
        assert_eq!(state.next_spawn_at, cfg.spawn_period_ms);
    }

    #[test]
    fn test_entity_ids_are_unique_and_increasing() {
        let cfg = Config::default();
        let mut state = GameState::new(7, &cfg);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let cfg = Config::default();
        let mut state = GameState::new(7, &cfg);
        assert!(state.end_game());
        assert!(!state.end_game());
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_reset_restores_initial_round() {
        let cfg = Config::default();
        let mut state = GameState::new(7, &cfg);
        state.player.y = 500.0;
        state.player.vy = 9.0;
        state.score = 4;
        let id = state.next_entity_id();
        state.gates.push(GatePair {
            id,
            x: 100.0,
            gap_top: 200.0,
            scored: true,
        });
        state.time_ms = 4000;
        state.end_game();

        state.reset(&cfg);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player, Player::new(&cfg));
        assert_eq!(state.score, 0);
        assert!(state.gates.is_empty());
        assert_eq!(state.next_spawn_at, 4000 + cfg.spawn_period_ms);
    }

    #[test]
    fn test_gap_draws_are_seed_deterministic() {
        let cfg = Config::default();
        let mut a = GameState::new(42, &cfg);
        let mut b = GameState::new(42, &cfg);
        let gaps_a: Vec<f32> = (0..10).map(|_| a.next_gap_top(&cfg)).collect();
        let gaps_b: Vec<f32> = (0..10).map(|_| b.next_gap_top(&cfg)).collect();
        assert_eq!(gaps_a, gaps_b);
    }
}

//! Fixed timestep simulation tick
//!
//! One central function advances the whole round: player integration, gate
//! spawning and motion, scoring, collision, and the Running -> Ended
//! transition. Spawning runs off the sim clock rather than a separate host
//! timer, so tick/spawn interleaving is deterministic.

use super::collision::{player_hits_gate, player_on_ground};
use super::state::{GamePhase, GameState, GatePair};
use crate::config::Config;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Apply the upward impulse this tick
    pub impulse: bool,
}

/// What happened during a tick, for the host to project onto its renderer
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GateSpawned { id: u32, gap_top: f32, x: f32 },
    GateRetired { id: u32 },
    GateCleared { id: u32, score: u32 },
    GameOver { score: u32 },
}

/// Advance the game state by one fixed tick.
///
/// A no-op while Ended: nothing moves, spawns, or scores until the session
/// resets. Returns the events of this tick in occurrence order.
pub fn tick(state: &mut GameState, input: &TickInput, cfg: &Config) -> Vec<GameEvent> {
    if state.phase == GamePhase::Ended {
        return Vec::new();
    }

    let mut events = Vec::new();
    state.time_ms += cfg.tick_ms;

    // Impulse overwrites velocity; it never stacks with the current value
    if input.impulse {
        state.player.vy = cfg.impulse;
    }

    // Semi-implicit Euler with dt = one tick
    state.player.vy += cfg.gravity;
    state.player.y += state.player.vy;

    // Ceiling clamp: ascent stops at the top instead of ending the round
    if state.player.y < 0.0 {
        state.player.y = 0.0;
        state.player.vy = 0.0;
    }

    // Advance gates and score passes. Strict `<` rather than `==`: a coarse
    // step can jump straight over the threshold.
    for gate in &mut state.gates {
        gate.x -= cfg.gate_step;
        if !gate.scored && gate.x < cfg.player_x {
            gate.scored = true;
            state.score += 1;
            events.push(GameEvent::GateCleared {
                id: gate.id,
                score: state.score,
            });
        }
    }

    // Retire gates that have left the playfield
    let retire = cfg.retire_threshold;
    if state.gates.iter().any(|g| g.x < retire) {
        events.extend(
            state
                .gates
                .iter()
                .filter(|g| g.x < retire)
                .map(|g| GameEvent::GateRetired { id: g.id }),
        );
        state.gates.retain(|g| g.x >= retire);
    }

    // Spawn cadence runs on the sim clock, decoupled from the motion tick.
    // New gates enter at spawn_x and first move on the next tick.
    while state.time_ms >= state.next_spawn_at {
        events.push(spawn_gate(state, cfg));
        state.next_spawn_at += cfg.spawn_period_ms;
    }

    // Any gate overlap or floor contact ends the round, exactly once
    let player = state.player;
    let collided = player_on_ground(&player, cfg)
        || state.gates.iter().any(|g| player_hits_gate(&player, g, cfg));
    if collided && state.end_game() {
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

fn spawn_gate(state: &mut GameState, cfg: &Config) -> GameEvent {
    let id = state.next_entity_id();
    let gap_top = state.next_gap_top(cfg);
    state.gates.push(GatePair {
        id,
        x: cfg.spawn_x,
        gap_top,
        scored: false,
    });
    GameEvent::GateSpawned {
        id,
        gap_top,
        x: cfg.spawn_x,
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::tests::spawning_config;
    use super::*;

    proptest! {
        #[test]
        fn spawned_gaps_stay_in_configured_range(seed in any::<u64>()) {
            let cfg = spawning_config();
            let mut state = GameState::new(seed, &cfg);
            let input = TickInput::default();
            let mut spawned = 0;
            while spawned < 8 {
                for event in tick(&mut state, &input, &cfg) {
                    if let GameEvent::GateSpawned { gap_top, .. } = event {
                        prop_assert!(gap_top >= cfg.gap_top_min);
                        prop_assert!(gap_top <= cfg.gap_top_max);
                        spawned += 1;
                    }
                }
                if state.phase == GamePhase::Ended {
                    state.reset(&cfg);
                }
            }
        }

        #[test]
        fn score_counts_each_gate_at_most_once(seed in any::<u64>()) {
            let cfg = spawning_config();
            let mut state = GameState::new(seed, &cfg);
            let input = TickInput { impulse: seed.is_multiple_of(3) };
            let mut cleared = 0u32;
            for _ in 0..2_000 {
                for event in tick(&mut state, &input, &cfg) {
                    if let GameEvent::GateCleared { score, .. } = event {
                        cleared += 1;
                        prop_assert_eq!(score, cleared);
                    }
                }
                if state.phase == GamePhase::Ended {
                    prop_assert_eq!(state.score, cleared);
                    break;
                }
            }
        }
    }
}

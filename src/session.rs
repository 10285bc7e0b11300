//! Game session
//!
//! `GameSession` wires the deterministic sim to its host collaborators: it
//! owns the accumulator clock, feeds one-shot input into ticks, projects
//! events and state onto the render sink, and runs the game-over/reset
//! cycle.

use crate::config::{Config, ConfigError};
use crate::highscore::HighScore;
use crate::host::{NotificationSink, RenderSink};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::store::ScoreStore;

/// Cap on time consumed per `advance` call, so a stalled host does not
/// fast-forward the sim through a burst of ticks
const MAX_FRAME_MS: u64 = 250;

pub struct GameSession<R, S, N> {
    cfg: Config,
    state: GameState,
    input: TickInput,
    high_score: HighScore,
    accumulator_ms: u64,
    render: R,
    store: S,
    notify: N,
}

impl<R: RenderSink, S: ScoreStore, N: NotificationSink> GameSession<R, S, N> {
    /// Validate the config, load the stored high score, and prime the
    /// displays. Invalid configuration refuses to start.
    pub fn new(
        cfg: Config,
        seed: u64,
        mut render: R,
        store: S,
        notify: N,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let high_score = HighScore::load(&store);
        let state = GameState::new(seed, &cfg);
        render.set_score(0);
        render.set_high_score(high_score.value());
        render.set_player_position(cfg.player_x, state.player.y);
        Ok(Self {
            cfg,
            state,
            input: TickInput::default(),
            high_score,
            accumulator_ms: 0,
            render,
            store,
            notify,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.value()
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    /// Queue the upward impulse for the next tick. Ignored entirely while
    /// Ended.
    pub fn impulse(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.input.impulse = true;
        }
    }

    /// Pump the session forward by wall-clock milliseconds, running as many
    /// fixed ticks as fit.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.accumulator_ms += elapsed_ms.min(MAX_FRAME_MS);
        while self.accumulator_ms >= self.cfg.tick_ms {
            self.accumulator_ms -= self.cfg.tick_ms;
            self.step();
        }
    }

    /// One fixed tick plus projection onto the render sink
    fn step(&mut self) {
        let events = tick(&mut self.state, &self.input, &self.cfg);
        // One-shot inputs are consumed by exactly one tick
        self.input = TickInput::default();

        let mut final_score = None;
        for event in events {
            match event {
                GameEvent::GateSpawned { id, gap_top, x } => {
                    let bottom_y = gap_top + self.cfg.gap_size;
                    self.render
                        .create_gate(id, gap_top, self.cfg.playfield_height - bottom_y, x);
                }
                GameEvent::GateRetired { id } => self.render.destroy_gate(id),
                GameEvent::GateCleared { score, .. } => self.render.set_score(score),
                GameEvent::GameOver { score } => final_score = Some(score),
            }
        }

        if let Some(score) = final_score {
            self.finish_round(score);
            return;
        }

        self.render
            .set_player_position(self.cfg.player_x, self.state.player.y);
        for gate in &self.state.gates {
            self.render.move_gate(gate.id, gate.x);
        }
    }

    /// The Ended -> Running cycle: tear down gates, persist and redisplay
    /// the high score if beaten, announce, reset, resume.
    fn finish_round(&mut self, score: u32) {
        log::info!("round over at score {score}");
        for gate in &self.state.gates {
            self.render.destroy_gate(gate.id);
        }
        if self.high_score.record(score, &mut self.store) {
            self.render.set_high_score(self.high_score.value());
        }
        self.notify.announce(&format!("Game over! Score: {score}"));

        self.state.reset(&self.cfg);
        self.input = TickInput::default();
        self.render.set_score(0);
        self.render
            .set_player_position(self.cfg.player_x, self.state.player.y);
    }
}

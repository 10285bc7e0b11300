//! High score tracking
//!
//! A single best score persisted through the host's `ScoreStore`. Store
//! failures are logged and never interrupt play, so the best is
//! monotonically non-decreasing for the process lifetime even when the
//! backing store is broken.

use crate::store::ScoreStore;

/// Store key for the persisted best score
pub const STORAGE_KEY: &str = "gapwing_highscore";

#[derive(Debug, Clone, Copy)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Load the stored best; absent or unreadable means 0
    pub fn load(store: &impl ScoreStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(best) => {
                log::info!("loaded high score {best}");
                Self { best }
            }
            None => {
                log::info!("no stored high score, starting at 0");
                Self { best: 0 }
            }
        }
    }

    /// Current best
    pub fn value(&self) -> u32 {
        self.best
    }

    /// Record a finished round. The best updates and persists only when the
    /// final score beats it; returns true on improvement.
    pub fn record(&mut self, score: u32, store: &mut impl ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = store.set(STORAGE_KEY, score) {
            log::warn!("failed to persist high score {score}: {err}");
        }
        true
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable gate ordering (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{gate_rects, player_hits_gate, player_on_ground, player_rect};
pub use rect::Rect;
pub use state::{GamePhase, GameState, GatePair, Player};
pub use tick::{GameEvent, TickInput, tick};

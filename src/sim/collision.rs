//! Collision detection
//!
//! Player vs gate rectangles and playfield bounds. Pure geometry computed
//! from sim state; rendered bounds are never consulted.

use super::rect::Rect;
use super::state::{GatePair, Player};
use crate::config::Config;

/// The player's bounding box
pub fn player_rect(player: &Player, cfg: &Config) -> Rect {
    Rect::from_origin_size(cfg.player_x, player.y, cfg.player_width, cfg.player_height)
}

/// The two rectangles of a gate: the slab above the gap and the slab below it
pub fn gate_rects(gate: &GatePair, cfg: &Config) -> (Rect, Rect) {
    let top = Rect::from_origin_size(gate.x, 0.0, cfg.gate_width, gate.gap_top);
    let bottom_y = gate.gap_top + cfg.gap_size;
    let bottom = Rect::from_origin_size(
        gate.x,
        bottom_y,
        cfg.gate_width,
        cfg.playfield_height - bottom_y,
    );
    (top, bottom)
}

/// Precise overlap test between the player and either rectangle of a gate.
/// Both sides shrink by the collision buffer first, so an exact edge graze
/// does not flicker into a hit.
pub fn player_hits_gate(player: &Player, gate: &GatePair, cfg: &Config) -> bool {
    let body = player_rect(player, cfg).shrink(cfg.collision_buffer);
    let (top, bottom) = gate_rects(gate, cfg);
    body.overlaps(&top.shrink(cfg.collision_buffer))
        || body.overlaps(&bottom.shrink(cfg.collision_buffer))
}

/// Ground contact: the player's bottom edge has reached the playfield floor
pub fn player_on_ground(player: &Player, cfg: &Config) -> bool {
    player.y >= cfg.floor_y()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_at(x: f32, gap_top: f32) -> GatePair {
        GatePair {
            id: 1,
            x,
            gap_top,
            scored: false,
        }
    }

    fn player_at(y: f32) -> Player {
        Player { y, vy: 0.0 }
    }

    #[test]
    fn test_player_inside_gap_does_not_collide() {
        // Gap occupies [100, 250]; player span [150, 190] sits fully inside
        // while horizontally overlapping the gate.
        let cfg = Config::default();
        let gate = gate_at(cfg.player_x, 100.0);
        assert!(!player_hits_gate(&player_at(150.0), &gate, &cfg));
    }

    #[test]
    fn test_player_above_gap_collides() {
        // Player span [90, 130] pokes above the gap's top edge at 100
        let cfg = Config::default();
        let gate = gate_at(cfg.player_x, 100.0);
        assert!(player_hits_gate(&player_at(90.0), &gate, &cfg));
    }

    #[test]
    fn test_player_below_gap_collides() {
        // Gap ends at 250; player span [220, 260] pokes below it
        let cfg = Config::default();
        let gate = gate_at(cfg.player_x, 100.0);
        assert!(player_hits_gate(&player_at(220.0), &gate, &cfg));
    }

    #[test]
    fn test_horizontally_clear_gate_never_collides() {
        // Same vertical miss as above, but the gate is far to the right
        let cfg = Config::default();
        let gate = gate_at(cfg.spawn_x, 100.0);
        assert!(!player_hits_gate(&player_at(90.0), &gate, &cfg));
    }

    #[test]
    fn test_buffer_forgives_edge_grazes() {
        // Player top edge exactly on the gap's top edge: raw rectangles touch,
        // the buffered test lets it pass.
        let cfg = Config::default();
        let gate = gate_at(cfg.player_x, 100.0);
        assert!(!player_hits_gate(&player_at(100.0), &gate, &cfg));
        // One unit inside the buffer still passes; past it, collides.
        assert!(!player_hits_gate(&player_at(100.0 - 3.0), &gate, &cfg));
        assert!(player_hits_gate(&player_at(100.0 - 5.0), &gate, &cfg));
    }

    #[test]
    fn test_ground_contact() {
        let cfg = Config::default();
        let floor = cfg.floor_y();
        assert!(!player_on_ground(&player_at(floor - 0.5), &cfg));
        assert!(player_on_ground(&player_at(floor), &cfg));
        assert!(player_on_ground(&player_at(floor + 10.0), &cfg));
    }

    #[test]
    fn test_gate_rects_partition_playfield() {
        let cfg = Config::default();
        let gate = gate_at(200.0, 120.0);
        let (top, bottom) = gate_rects(&gate, &cfg);
        assert_eq!(top.min.y, 0.0);
        assert_eq!(top.max.y, 120.0);
        assert_eq!(bottom.min.y, 120.0 + cfg.gap_size);
        assert_eq!(bottom.max.y, cfg.playfield_height);
        assert_eq!(top.width(), cfg.gate_width);
        assert_eq!(bottom.width(), cfg.gate_width);
    }
}

//! Host collaborator interfaces
//!
//! The sim never draws or announces anything itself. Front ends implement
//! these traits and the session projects state changes onto them; rendering
//! is a pure projection of sim state, never a source of truth for
//! collisions.

/// Receives entity positions, gate lifecycle calls, and HUD values
pub trait RenderSink {
    fn set_player_position(&mut self, x: f32, y: f32);
    /// A new gate: rectangle heights above and below the gap, at `x`
    fn create_gate(&mut self, id: u32, top_height: f32, bottom_height: f32, x: f32);
    fn move_gate(&mut self, id: u32, x: f32);
    fn destroy_gate(&mut self, id: u32);
    fn set_score(&mut self, score: u32);
    fn set_high_score(&mut self, score: u32);
}

/// Game-over announcements, once per round. An implementation may block;
/// the session tolerates either.
pub trait NotificationSink {
    fn announce(&mut self, message: &str);
}

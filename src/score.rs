//! Scoring utilities for Skip-Bo simulations.
//!
//! Current scoring rule (winner-only):
//!   points = 25 (base win) + 5 * (sum of opponents' remaining stock cards)
//! Non-winning players receive 0 points.
//! Truncated games award no points.

use crate::action::PlayerId;
use crate::state::GameState;

/// Compute the winner's points for a finished game.
///
/// Assumes `winner` really is the player whose stock pile ran out; pair it
/// with [`GameState::winner`]. Truncated games should skip scoring entirely.
pub fn winner_points(state: &GameState, winner: PlayerId) -> usize {
    let opponents_stock_total: usize = state
        .player_states
        .iter()
        .enumerate()
        .filter(|(id, _)| *id != winner)
        .map(|(_, player)| player.stock_pile.len())
        .sum();
    25 + 5 * opponents_stock_total
}

//! Skip-Bo rules engine for simulations and reinforcement-learning workloads.
//!
//! States are plain serializable data. Applying an action never mutates the
//! input state; it returns an independent successor, so callers can hold on
//! to any snapshot for replay, undo or training buffers.

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, CardDestination, CardSource, PlayerId};
pub use crate::card::Card;
pub use crate::error::GameError;
pub use crate::game::{GameConfig, TruncationRule, next_build_value};
pub use crate::score::winner_points;
pub use crate::state::{GameState, LastStep, PlayerState};
pub use crate::visualize::{describe_action, render_state};

use thiserror::Error;

/// Errors raised while setting up a game.
///
/// Illegal and malformed moves are never errors: the transition function
/// records them on the state (`last_step`, `invalid_actions_count`) and leaves
/// everything else untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NotEnoughPlayers,
    #[error("dealing requires {required} cards but only {available} are available")]
    NotEnoughCards { required: usize, available: usize },
}

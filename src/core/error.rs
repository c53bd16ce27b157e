//! Error types.
//!
//! Nothing here is fatal. An [`ActionError`] means the action was refused
//! and the state is untouched; its `Display` text is the message to show
//! the player.

use thiserror::Error;

use super::action::Action;
use crate::strategy::Decision;

/// An action refused in the current state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Game over")]
    GameOver,
    #[error("You must roll before you can {0}")]
    MustRollFirst(Action),
    #[error("No rerolls remaining")]
    NoRerolls,
    #[error("You must freeze a die to reroll")]
    MustFreeze,
    #[error("Fouled attempt: stop to continue")]
    Fouled,
    #[error("All dice rolled: stop to keep your score")]
    NoDiceLeft,
    #[error("Die {0} cannot be frozen right now")]
    NotFreezable(usize),
    #[error("There is no die at position {position} (only {count})")]
    NoSuchDie { position: usize, count: usize },
    #[error("{action} is not part of {game}")]
    Unsupported { action: Action, game: &'static str },
    #[error("Computer player has chosen to {0}")]
    Forced(Decision),
}

/// Invalid game configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player name must not be blank")]
    BlankName,
    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },
}

//! Core types: dice, RNG, configuration, actions, state, errors.
//!
//! Everything here is event-agnostic. Events combine these pieces through
//! their `RulesEngine` implementations.

pub mod rng;
pub mod die;
pub mod config;
pub mod action;
pub mod state;
pub mod error;
pub mod view;

pub use rng::GameRng;
pub use die::{Die, FaceSet, Freeze, FreezeableDie, Roll, UNROLLED};
pub use config::{GameConfig, GameKind, PlayerName};
pub use action::{Action, ActionRecord, RolledFaces};
pub use state::{GameState, Phase};
pub use error::{ActionError, ConfigError};
pub use view::{DieView, Scoreboard};

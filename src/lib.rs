//! # decathlon-dice
//!
//! Rules engine for three decathlon dice events: 400 Meters, Discus and
//! Shot Put.
//!
//! ## Design Principles
//!
//! 1. **Front-end agnostic**: Games take `Action`s in and hand a
//!    `Scoreboard` out. Drawing dice and wiring buttons is someone else's job.
//!
//! 2. **Explicit state**: All progress lives in one `GameState` value that
//!    only a `RulesEngine` mutates.
//!
//! 3. **Deterministic**: Dice are rolled from a seeded `GameRng`; every
//!    accepted action is logged with the faces it rolled and can be replayed.
//!
//! ## Modules
//!
//! - `core`: Dice, RNG, configuration, actions, state, errors, views
//! - `rules`: `RulesEngine` trait for event implementations
//! - `strategy`: Reroll decisions for the computer 400 Meters player
//! - `turn`: `TurnEngine`, the roll/keep driver shared by all events
//! - `games`: The events themselves
//!
//! ## Example
//!
//! ```
//! use decathlon_dice::games::shot_put::ShotPutBuilder;
//! use decathlon_dice::TurnEngine;
//!
//! let (rules, state) = ShotPutBuilder::new().player("Ulf").build(42).unwrap();
//! let mut game = TurnEngine::new(rules, state);
//!
//! game.roll().unwrap();
//! game.stop().unwrap();
//! assert_eq!(game.state().attempt, 2);
//! ```

pub mod core;
pub mod rules;
pub mod strategy;
pub mod turn;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, Die, DieView, FaceSet, Freeze, FreezeableDie,
    GameConfig, GameKind, GameRng, GameState, Phase, PlayerName, Roll, Scoreboard,
};

pub use crate::rules::{Outcome, RulesEngine};

pub use crate::strategy::{AlwaysKeep, ChartStrategy, Decision, RerollPolicy};

pub use crate::turn::TurnEngine;

pub use crate::games::discus::{Discus, DiscusBuilder};
pub use crate::games::four_hundred::{FourHundredMeters, FourHundredMetersBuilder, Heat, HeatResult};
pub use crate::games::shot_put::{ShotPut, ShotPutBuilder};

//! Rules engine trait for the events.
//!
//! Events implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - When the game is over
//!
//! The turn engine calls into `RulesEngine` but never interprets
//! event-specific scoring directly.

pub mod engine;

pub use engine::{Outcome, RulesEngine};

pub(crate) use engine::ensure_running;

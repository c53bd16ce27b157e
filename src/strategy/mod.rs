//! Reroll decisions for computer-controlled 400 Meters players.
//!
//! A strategy is consulted by the turn engine right after every roll and
//! answers one question: roll again, or keep what is showing?
//!
//! - `Decision`: the answer
//! - `RerollPolicy`: trait for anything that can answer it
//! - `ChartStrategy`: the fixed lookup chart the computer player uses
//! - `AlwaysKeep`: banks the first roll of every round

mod policy;

pub use policy::{should_reroll, AlwaysKeep, ChartStrategy, Decision, RerollPolicy};

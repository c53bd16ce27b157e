//! 400 Meters.
//!
//! Four rounds, two dice per round:
//! - Roll the round's pair, then keep it or reroll
//! - The first roll of a round is free; every reroll spends one of the
//!   game's five rerolls
//! - A six counts as -6
//! - Score is the sum of the four kept pairs
//!
//! `Heat` runs a human game and a computer game side by side.

mod game;
mod heat;

pub use game::{FourHundredMeters, FourHundredMetersBuilder, PenaltyDice, SPRINT_FACES};
pub use heat::{Heat, HeatResult};

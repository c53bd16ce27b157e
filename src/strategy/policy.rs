//! Reroll policies.

use serde::{Deserialize, Serialize};

/// Reroll or keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Reroll,
    Keep,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Reroll => write!(f, "reroll"),
            Decision::Keep => write!(f, "keep"),
        }
    }
}

/// Decides whether to reroll after a roll.
pub trait RerollPolicy: Send + Sync {
    /// Decide for the given 0-based round, rerolls left (after paying for
    /// the roll just made) and value showing.
    fn decide(&self, round: u32, rerolls: u32, roll_value: i32) -> Decision;
}

/// Chart approximating the optimal stopping strategy for 400 Meters.
///
/// The thresholds are game-balance constants and are reproduced as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartStrategy;

impl RerollPolicy for ChartStrategy {
    fn decide(&self, round: u32, rerolls: u32, roll_value: i32) -> Decision {
        if should_reroll(round, rerolls, roll_value) {
            Decision::Reroll
        } else {
            Decision::Keep
        }
    }
}

/// The chart itself: `true` means reroll.
#[must_use]
pub fn should_reroll(round: u32, rerolls: u32, roll_value: i32) -> bool {
    // must keep with nothing left to spend
    if rerolls == 0 {
        return false;
    }
    let budget = i32::try_from(rerolls).unwrap_or(i32::MAX);
    match (round, rerolls) {
        (0, 2..) => roll_value < budget,
        (0, 1) => roll_value < -1,
        (1, _) => roll_value < budget.saturating_add(1),
        (2, 4..) => roll_value < 6,
        (2, 2..=3) => roll_value < budget.saturating_add(2),
        (2, 1) => roll_value < 2,
        (3, 3..) => roll_value < 7,
        (3, 2) => roll_value < 6,
        (3, 1) => roll_value < 3,
        _ => false,
    }
}

/// Never rerolls.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysKeep;

impl RerollPolicy for AlwaysKeep {
    fn decide(&self, _round: u32, _rerolls: u32, _roll_value: i32) -> Decision {
        Decision::Keep
    }
}

//! Read-only snapshot for front ends.
//!
//! A `Scoreboard` carries everything a presentation layer needs to draw a
//! game: dice, counters, flags, the prompt to show and the actions it may
//! offer. It is plain data and serializes with serde.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::config::GameKind;

/// One die position as the player sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieView {
    /// Value showing (0 when unrolled).
    pub value: i32,
    /// Face index showing, if rolled.
    pub face: Option<u8>,
    pub frozen: bool,
    /// Offered for freezing.
    pub freezable: bool,
    /// Showing a foul face.
    pub foul: bool,
}

/// Snapshot of a game for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player: String,
    pub kind: GameKind,
    pub dice: Vec<DieView>,
    /// 0-based round (400 Meters).
    pub round: u32,
    /// 1-based attempt (Discus, Shot Put).
    pub attempt: u32,
    /// Current roll value or running attempt total.
    pub attempt_score: i32,
    /// Total (400 Meters) or high score.
    pub score: i32,
    pub rerolls: u32,
    pub fouled: bool,
    pub finished: bool,
    /// Prompt for the player.
    pub message: String,
    /// Actions that would currently be accepted.
    pub legal_actions: Vec<Action>,
}

impl Scoreboard {
    /// Is this action currently on offer?
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.legal_actions.contains(&action)
    }
}

//! Per-game state.
//!
//! ## GameState
//!
//! One value per game in progress, shared by all three events:
//! - Progress: phase, round, attempt
//! - Budgets: rerolls
//! - Scoring: running attempt value, score, attempt history, foul flag
//! - The dice on the table and the RNG that rolls them
//! - Action log
//!
//! A few cursors only matter to one event (`position` for Shot Put,
//! `frozen_mark` and `freezable` for Discus, `forced` for a
//! strategy-driven 400 Meters player); the other events leave them at
//! their defaults.
//!
//! State is mutated only through a `RulesEngine`.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, RolledFaces};
use super::config::PlayerName;
use super::die::Roll;
use super::rng::GameRng;
use crate::strategy::Decision;

/// Where a game is in its roll/keep cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing rolled yet this round/attempt.
    AwaitingFirstRoll,
    /// At least one roll made; the player may roll again or bank.
    Rolled,
    /// No further actions are accepted.
    Finished,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState<D> {
    /// Player whose game this is.
    pub player: PlayerName,

    /// Roll/keep phase.
    pub phase: Phase,

    /// Current round, 0-based (400 Meters).
    pub round: u32,

    /// Current attempt, 1-based (Discus, Shot Put).
    pub attempt: u32,

    /// Rerolls left for the rest of the game.
    pub rerolls: u32,

    /// Cumulative score (400 Meters) or high score (Discus, Shot Put).
    pub score: i32,

    /// Value of the current roll or running attempt total.
    pub attempt_score: i32,

    /// Banked score of every completed round/attempt, in order.
    pub history: Vec<i32>,

    /// The current attempt is fouled and must be stopped.
    pub fouled: bool,

    /// Dice on the table, one per position.
    pub dice: Vec<D>,

    /// Next die position to roll (Shot Put).
    pub position: usize,

    /// Frozen dice counted at the last roll of this attempt (Discus).
    /// `None` until the attempt's first roll.
    pub frozen_mark: Option<usize>,

    /// Dice that could be frozen after the last roll (Discus).
    pub freezable: Vec<bool>,

    /// Action a strategy has committed this player to.
    pub forced: Option<Decision>,

    /// Die roller.
    pub rng: GameRng,

    /// Accepted actions in order.
    pub log: Vec<ActionRecord>,
}

impl<D: Roll> GameState<D> {
    /// Create a game state at the start of round 0 / attempt 1.
    #[must_use]
    pub fn new(player: PlayerName, dice: Vec<D>, rerolls: u32, rng: GameRng) -> Self {
        let freezable = vec![false; dice.len()];
        Self {
            player,
            phase: Phase::AwaitingFirstRoll,
            round: 0,
            attempt: 1,
            rerolls,
            score: 0,
            attempt_score: 0,
            history: Vec::new(),
            fouled: false,
            dice,
            position: 0,
            frozen_mark: None,
            freezable,
            forced: None,
            rng,
            log: Vec::new(),
        }
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Has anything been rolled in the current round/attempt?
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.phase == Phase::Rolled
    }

    /// Sum of the values showing on all dice.
    #[must_use]
    pub fn dice_total(&self) -> i32 {
        self.dice.iter().map(Roll::value).sum()
    }

    /// Sum of the values showing at the given positions.
    #[must_use]
    pub fn total_at(&self, positions: std::ops::Range<usize>) -> i32 {
        self.dice
            .get(positions)
            .map_or(0, |dice| dice.iter().map(Roll::value).sum())
    }

    /// Clear the table for a new attempt.
    ///
    /// Resets every die and all per-attempt cursors. Scores, history,
    /// rerolls and the log are kept.
    pub fn reset_attempt(&mut self) {
        for die in &mut self.dice {
            die.reset();
        }
        self.phase = Phase::AwaitingFirstRoll;
        self.attempt_score = 0;
        self.fouled = false;
        self.position = 0;
        self.frozen_mark = None;
        self.freezable.iter_mut().for_each(|f| *f = false);
    }

    /// Append an accepted action to the log.
    ///
    /// `round` and `attempt` are the values the action was taken in, which
    /// differ from the current ones after a keep or stop.
    pub fn record_action(&mut self, action: Action, round: u32, attempt: u32, faces: RolledFaces) {
        let sequence = self.log.len() as u32;
        self.log
            .push(ActionRecord::new(action, round, attempt, sequence, faces));
    }
}

//! A human and a computer runner racing side by side.
//!
//! The two games never interact: each has its own state and its own RNG
//! stream forked from the heat's seed. The computer game is driven by
//! `ChartStrategy`.

use crate::core::{ActionError, ConfigError, GameRng, PlayerName};
use crate::strategy::ChartStrategy;
use crate::turn::TurnEngine;

use super::game::{FourHundredMeters, FourHundredMetersBuilder};

/// Who won a finished heat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatResult {
    Human,
    Computer,
    Tie,
}

/// Two 400 Meters games, one human and one computer.
#[derive(Debug)]
pub struct Heat {
    human: TurnEngine<FourHundredMeters>,
    computer: TurnEngine<FourHundredMeters>,
}

impl Heat {
    /// Start a heat with default rules.
    pub fn new(player: impl Into<String>, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = GameRng::new(seed);
        let (rules, state) = FourHundredMetersBuilder::new()
            .player(player)
            .build_with_rng(rng.fork())?;
        let human = TurnEngine::new(rules, state);

        let (rules, state) = FourHundredMetersBuilder::new()
            .player(PlayerName::computer().as_str())
            .build_with_rng(rng.fork())?;
        let computer = TurnEngine::new(rules, state).with_policy(ChartStrategy);

        Ok(Self { human, computer })
    }

    #[must_use]
    pub fn human(&self) -> &TurnEngine<FourHundredMeters> {
        &self.human
    }

    /// The human game, for feeding it actions.
    pub fn human_mut(&mut self) -> &mut TurnEngine<FourHundredMeters> {
        &mut self.human
    }

    #[must_use]
    pub fn computer(&self) -> &TurnEngine<FourHundredMeters> {
        &self.computer
    }

    /// Advance the computer by one action.
    pub fn step_computer(&mut self) -> Result<(), ActionError> {
        self.computer.step().map(|_| ())
    }

    /// Run the computer game to the end and return its score.
    pub fn play_computer(&mut self) -> Result<i32, ActionError> {
        self.computer.play_out()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.human.is_finished() && self.computer.is_finished()
    }

    /// The winner, once both games are over.
    #[must_use]
    pub fn result(&self) -> Option<HeatResult> {
        if !self.is_finished() {
            return None;
        }
        let human = self.human.state().score;
        let computer = self.computer.state().score;
        Some(match human.cmp(&computer) {
            std::cmp::Ordering::Greater => HeatResult::Human,
            std::cmp::Ordering::Less => HeatResult::Computer,
            std::cmp::Ordering::Equal => HeatResult::Tie,
        })
    }
}

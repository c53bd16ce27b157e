//! Turn engine implementation.

use crate::core::action::{Action, ActionRecord};
use crate::core::error::ActionError;
use crate::core::state::GameState;
use crate::core::view::Scoreboard;
use crate::rules::{Outcome, RulesEngine};
use crate::strategy::{Decision, RerollPolicy};

/// Drives one game through its roll/keep cycle.
pub struct TurnEngine<R: RulesEngine> {
    rules: R,
    state: GameState<R::Die>,
    policy: Option<Box<dyn RerollPolicy>>,
}

impl<R: RulesEngine> TurnEngine<R> {
    /// Create an engine for a human-controlled game.
    #[must_use]
    pub fn new(rules: R, state: GameState<R::Die>) -> Self {
        Self {
            rules,
            state,
            policy: None,
        }
    }

    /// Hand control to a policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl RerollPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Rebuild a game by replaying a log.
    ///
    /// Recorded faces are loaded into the state's RNG ahead of each action,
    /// so the replay rolls exactly what the original game rolled.
    pub fn replay(rules: R, state: GameState<R::Die>, log: &[ActionRecord]) -> Result<Self, ActionError> {
        let mut engine = Self::new(rules, state);
        for record in log {
            engine.load_faces(&record.faces);
            engine.act(record.action)?;
        }
        Ok(engine)
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState<R::Die> {
        &self.state
    }

    /// Take the rules and state back out.
    #[must_use]
    pub fn into_parts(self) -> (R, GameState<R::Die>) {
        (self.rules, self.state)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rules.is_terminal(&self.state)
    }

    /// Is a policy in control?
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.policy.is_some()
    }

    /// The policy's decision on the last roll, if one is pending.
    #[must_use]
    pub fn decision(&self) -> Option<Decision> {
        self.state.forced
    }

    /// Accepted actions so far.
    #[must_use]
    pub fn log(&self) -> &[ActionRecord] {
        &self.state.log
    }

    /// Queue faces to be rolled before any fresh draw.
    pub fn load_faces(&mut self, faces: &[u8]) {
        self.state.rng.load(faces);
    }

    /// Check an action without applying it.
    pub fn validate(&self, action: Action) -> Result<(), ActionError> {
        if let Some(decision) = self.state.forced {
            if action != decision_action(decision) {
                return Err(ActionError::Forced(decision));
            }
        }
        self.rules.validate(&self.state, action)
    }

    /// Actions that would be accepted right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules
            .candidate_actions(&self.state)
            .into_iter()
            .filter(|&action| self.validate(action).is_ok())
            .collect()
    }

    /// Apply an action.
    ///
    /// A refused action leaves the game untouched.
    pub fn act(&mut self, action: Action) -> Result<Outcome, ActionError> {
        if let Err(err) = self.validate(action) {
            log::debug!("{}: refused {}: {}", self.state.player, action, err);
            return Err(err);
        }

        let (round, attempt) = (self.state.round, self.state.attempt);
        let outcome = self.rules.apply_action(&mut self.state, action)?;
        self.state.record_action(action, round, attempt, outcome.faces());
        log::debug!("{}: {} -> {:?}", self.state.player, action, outcome);

        self.state.forced = match (&self.policy, &outcome) {
            (Some(_), Outcome::Rolled { .. }) if self.state.rerolls == 0 => Some(Decision::Keep),
            (Some(policy), Outcome::Rolled { value, .. }) => {
                Some(policy.decide(self.state.round, self.state.rerolls, *value))
            }
            _ => None,
        };
        if let Some(decision) = self.state.forced {
            log::debug!("{}: decides to {}", self.state.player, decision);
        }

        if let Outcome::Banked { finished: true, total, .. } = outcome {
            log::info!("{}: {} finished with {}", self.state.player, self.rules.config().kind, total);
        }
        Ok(outcome)
    }

    pub fn roll(&mut self) -> Result<Outcome, ActionError> {
        self.act(Action::Roll)
    }

    pub fn keep(&mut self) -> Result<Outcome, ActionError> {
        self.act(Action::Keep)
    }

    pub fn stop(&mut self) -> Result<Outcome, ActionError> {
        self.act(Action::Stop)
    }

    pub fn toggle_freeze(&mut self, position: usize) -> Result<Outcome, ActionError> {
        self.act(Action::ToggleFreeze(position))
    }

    /// Take the next automatic action: whatever the policy decided, or a
    /// roll when nothing is pending.
    pub fn step(&mut self) -> Result<Outcome, ActionError> {
        let action = self.state.forced.map_or(Action::Roll, decision_action);
        self.act(action)
    }

    /// Step until the game ends and return the final score.
    pub fn play_out(&mut self) -> Result<i32, ActionError> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.state.score)
    }

    /// Snapshot for display.
    ///
    /// While a policy decision is pending the message announces it instead
    /// of the rules' prompt.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        let state = &self.state;
        let message = match state.forced {
            Some(decision) => format!("{} has chosen to {}", state.player, decision),
            None => self.rules.prompt(state),
        };
        Scoreboard {
            player: state.player.to_string(),
            kind: self.rules.config().kind,
            dice: (0..state.dice.len())
                .map(|position| self.rules.die_view(state, position))
                .collect(),
            round: state.round,
            attempt: state.attempt,
            attempt_score: state.attempt_score,
            score: state.score,
            rerolls: state.rerolls,
            fouled: state.fouled,
            finished: state.is_finished(),
            message,
            legal_actions: self.legal_actions(),
        }
    }
}

impl<R: RulesEngine + std::fmt::Debug> std::fmt::Debug for TurnEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("rules", &self.rules)
            .field("state", &self.state)
            .field("automatic", &self.policy.is_some())
            .finish()
    }
}

fn decision_action(decision: Decision) -> Action {
    match decision {
        Decision::Reroll => Action::Roll,
        Decision::Keep => Action::Keep,
    }
}

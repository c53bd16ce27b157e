//! Shot Put rules.

use smallvec::smallvec;

use crate::core::{
    Action, ActionError, ConfigError, Die, FaceSet, GameConfig, GameKind, GameRng, GameState, Phase,
    PlayerName, Roll,
};
use crate::rules::{ensure_running, Outcome, RulesEngine};

/// Faces of a shot put die: a one fouls.
pub const SHOT_PUT_FACES: FaceSet = FaceSet::STANDARD.with_foul(1);

/// Shot Put rules.
#[derive(Clone, Debug)]
pub struct ShotPut {
    config: GameConfig,
}

/// Builder for creating a Shot Put game.
pub struct ShotPutBuilder {
    player: String,
    attempts: u32,
    dice: usize,
}

impl Default for ShotPutBuilder {
    fn default() -> Self {
        Self {
            player: String::new(),
            attempts: 3,
            dice: 8,
        }
    }
}

impl ShotPutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player = name.into();
        self
    }

    pub fn attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn dice(mut self, dice: usize) -> Self {
        self.dice = dice;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> Result<(ShotPut, GameState<Die>), ConfigError> {
        let player = PlayerName::new(&self.player)?;
        let config = GameConfig::new(GameKind::ShotPut, player.clone(), self.dice, self.attempts);
        config.validate()?;

        let dice = vec![Die::new(SHOT_PUT_FACES); self.dice];
        let state = GameState::new(player, dice, 0, GameRng::new(seed));
        Ok((ShotPut { config }, state))
    }
}

impl RulesEngine for ShotPut {
    type Die = Die;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(&self, state: &GameState<Die>, action: Action) -> Result<(), ActionError> {
        ensure_running(state)?;
        match action {
            Action::Roll if state.fouled => Err(ActionError::Fouled),
            Action::Roll if state.position >= state.dice.len() => Err(ActionError::NoDiceLeft),
            Action::Roll => Ok(()),
            Action::Stop if !state.has_rolled() => Err(ActionError::MustRollFirst(action)),
            Action::Stop => Ok(()),
            Action::Keep | Action::ToggleFreeze(_) => Err(ActionError::Unsupported {
                action,
                game: GameKind::ShotPut.name(),
            }),
        }
    }

    fn apply_action(&self, state: &mut GameState<Die>, action: Action) -> Result<Outcome, ActionError> {
        self.validate(state, action)?;

        if action == Action::Stop {
            let score = if state.fouled { 0 } else { state.attempt_score };
            state.history.push(score);
            if state.history.iter().max() == Some(&score) {
                state.score = score;
            }
            log::info!("{}: shot put attempt {} scored {}", state.player, state.attempt, score);

            state.attempt += 1;
            let finished = state.attempt > self.config.rounds;
            if finished {
                state.phase = Phase::Finished;
            } else {
                state.reset_attempt();
            }
            return Ok(Outcome::Banked {
                score,
                total: state.score,
                finished,
            });
        }

        let position = state.position;
        let GameState { dice, rng, .. } = &mut *state;
        let die = dice.get_mut(position).ok_or(ActionError::NoDiceLeft)?;
        let value = die.roll(rng);
        let faces = smallvec![die.face().unwrap_or_default()];
        let foul = die.is_foul();
        state.phase = Phase::Rolled;

        if foul {
            state.fouled = true;
            state.attempt_score = 0;
            log::debug!("{}: shot put attempt {} fouled", state.player, state.attempt);
            return Ok(Outcome::Fouled { faces });
        }

        state.attempt_score += value;
        state.position += 1;
        Ok(Outcome::Rolled {
            faces,
            value: state.attempt_score,
        })
    }

    fn candidate_actions(&self, _state: &GameState<Die>) -> Vec<Action> {
        vec![Action::Roll, Action::Stop]
    }

    fn prompt(&self, state: &GameState<Die>) -> String {
        match state.phase {
            Phase::Finished => "Game over".to_string(),
            Phase::AwaitingFirstRoll => format!("Roll to start attempt {}", state.attempt),
            Phase::Rolled if state.fouled => "Fouled attempt: stop to continue".to_string(),
            Phase::Rolled if state.position >= state.dice.len() => {
                "All dice rolled: stop to keep your score".to_string()
            }
            Phase::Rolled => "Roll again or stop to keep".to_string(),
        }
    }
}

//! Discus rules.

use smallvec::SmallVec;

use crate::core::{
    Action, ActionError, ConfigError, DieView, FaceSet, Freeze, FreezeableDie, GameConfig, GameKind,
    GameRng, GameState, Phase, PlayerName, Roll, RolledFaces,
};
use crate::rules::{ensure_running, Outcome, RulesEngine};

/// Faces of a discus die: evens score, odds miss.
pub const DISCUS_FACES: FaceSet = FaceSet::new([0, 2, 0, 4, 0, 6]);

/// Discus rules.
#[derive(Clone, Debug)]
pub struct Discus {
    config: GameConfig,
}

/// Builder for creating a Discus game.
pub struct DiscusBuilder {
    player: String,
    attempts: u32,
    dice: usize,
}

impl Default for DiscusBuilder {
    fn default() -> Self {
        Self {
            player: String::new(),
            attempts: 3,
            dice: 5,
        }
    }
}

impl DiscusBuilder {
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
    pub fn build(self, seed: u64) -> Result<(Discus, GameState<FreezeableDie>), ConfigError> {
        let player = PlayerName::new(&self.player)?;
        let config = GameConfig::new(GameKind::Discus, player.clone(), self.dice, self.attempts);
        config.validate()?;

        let dice = vec![FreezeableDie::new(DISCUS_FACES); self.dice];
        let state = GameState::new(player, dice, 0, GameRng::new(seed));
        Ok((Discus { config }, state))
    }
}

impl Discus {
    /// Number of frozen dice.
    #[must_use]
    pub fn frozen_count(&self, state: &GameState<FreezeableDie>) -> usize {
        state.dice.iter().filter(|d| d.is_frozen()).count()
    }

    fn roll(&self, state: &mut GameState<FreezeableDie>) -> Outcome {
        let mut faces: RolledFaces = SmallVec::new();
        let GameState { dice, rng, .. } = &mut *state;
        for die in dice.iter_mut().filter(|d| !d.is_frozen()) {
            die.roll(rng);
            faces.extend(die.face());
        }

        state.frozen_mark = Some(self.frozen_count(state));
        for (freezable, die) in state.freezable.iter_mut().zip(&state.dice) {
            *freezable = !die.is_frozen() && die.value() != 0;
        }
        state.phase = Phase::Rolled;

        // an attempt needs at least one scoring die among those just rolled
        state.fouled = !state
            .dice
            .iter()
            .any(|d| !d.is_frozen() && d.value() > 0);
        if state.fouled {
            state.attempt_score = 0;
            log::debug!("{}: discus attempt {} fouled", state.player, state.attempt);
            return Outcome::Fouled { faces };
        }

        state.attempt_score = state.dice_total();
        Outcome::Rolled {
            faces,
            value: state.attempt_score,
        }
    }

    fn stop(&self, state: &mut GameState<FreezeableDie>) -> Outcome {
        let score = if state.fouled { 0 } else { state.dice_total() };
        state.history.push(score);
        if score > state.score {
            state.score = score;
        }
        log::info!("{}: discus attempt {} scored {}", state.player, state.attempt, score);

        state.attempt += 1;
        let finished = state.attempt > self.config.rounds;
        if finished {
            state.phase = Phase::Finished;
        } else {
            state.reset_attempt();
        }
        Outcome::Banked {
            score,
            total: state.score,
            finished,
        }
    }
}

impl RulesEngine for Discus {
    type Die = FreezeableDie;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(&self, state: &GameState<FreezeableDie>, action: Action) -> Result<(), ActionError> {
        ensure_running(state)?;
        match action {
            Action::Roll if state.fouled => Err(ActionError::Fouled),
            Action::Roll => match state.frozen_mark {
                Some(mark) if self.frozen_count(state) <= mark => Err(ActionError::MustFreeze),
                _ => Ok(()),
            },
            Action::Stop if !state.has_rolled() => Err(ActionError::MustRollFirst(action)),
            Action::Stop => Ok(()),
            Action::ToggleFreeze(position) if position >= state.dice.len() => Err(ActionError::NoSuchDie {
                position,
                count: state.dice.len(),
            }),
            Action::ToggleFreeze(position) if state.freezable.get(position) != Some(&true) => {
                Err(ActionError::NotFreezable(position))
            }
            Action::ToggleFreeze(_) => Ok(()),
            Action::Keep => Err(ActionError::Unsupported {
                action,
                game: GameKind::Discus.name(),
            }),
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState<FreezeableDie>,
        action: Action,
    ) -> Result<Outcome, ActionError> {
        self.validate(state, action)?;

        Ok(match action {
            Action::Roll => self.roll(state),
            Action::Stop => self.stop(state),
            Action::ToggleFreeze(position) => {
                let count = state.dice.len();
                let die = state
                    .dice
                    .get_mut(position)
                    .ok_or(ActionError::NoSuchDie { position, count })?;
                die.toggle_frozen();
                Outcome::FreezeToggled {
                    position,
                    frozen: die.is_frozen(),
                }
            }
            Action::Keep => {
                return Err(ActionError::Unsupported {
                    action,
                    game: GameKind::Discus.name(),
                })
            }
        })
    }

    fn candidate_actions(&self, state: &GameState<FreezeableDie>) -> Vec<Action> {
        let mut actions = vec![Action::Roll, Action::Stop];
        actions.extend((0..state.dice.len()).map(Action::ToggleFreeze));
        actions
    }

    fn prompt(&self, state: &GameState<FreezeableDie>) -> String {
        match state.phase {
            Phase::Finished => "Game over".to_string(),
            Phase::AwaitingFirstRoll => "Roll to start".to_string(),
            Phase::Rolled if state.fouled => "Fouled attempt: stop to continue".to_string(),
            Phase::Rolled => "Stop to keep, or freeze a die and roll again".to_string(),
        }
    }

    fn die_view(&self, state: &GameState<FreezeableDie>, position: usize) -> DieView {
        state.dice.get(position).map_or_else(DieView::default, |die| DieView {
            value: die.value(),
            face: die.face(),
            frozen: die.is_frozen(),
            freezable: state.freezable.get(position).copied().unwrap_or(false),
            foul: die.is_foul(),
        })
    }
}

//! 400 Meters rules.

use smallvec::SmallVec;

use crate::core::{
    Action, ActionError, ConfigError, Die, FaceSet, GameConfig, GameKind, GameRng, GameState, Phase,
    PlayerName, Roll, RolledFaces,
};
use crate::rules::{ensure_running, Outcome, RulesEngine};

/// Faces of a 400 Meters die: a six is a penalty.
pub const SPRINT_FACES: FaceSet = FaceSet::new([1, 2, 3, 4, 5, -6]);

/// Dice per round.
const PAIR: usize = 2;

/// Which dice of each pair carry the -6 face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PenaltyDice {
    /// Every die.
    #[default]
    Both,
    /// Only the second die of each pair; the first is a plain 1-6 die.
    SecondOnly,
}

/// 400 Meters rules.
#[derive(Clone, Debug)]
pub struct FourHundredMeters {
    config: GameConfig,
}

/// Builder for creating a 400 Meters game.
pub struct FourHundredMetersBuilder {
    player: String,
    rounds: u32,
    rerolls: u32,
    penalty: PenaltyDice,
}

impl Default for FourHundredMetersBuilder {
    fn default() -> Self {
        Self {
            player: String::new(),
            rounds: 4,
            rerolls: 5,
            penalty: PenaltyDice::Both,
        }
    }
}

impl FourHundredMetersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player = name.into();
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn rerolls(mut self, rerolls: u32) -> Self {
        self.rerolls = rerolls;
        self
    }

    pub fn penalty_dice(mut self, penalty: PenaltyDice) -> Self {
        self.penalty = penalty;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> Result<(FourHundredMeters, GameState<Die>), ConfigError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build with an existing RNG stream.
    pub fn build_with_rng(self, rng: GameRng) -> Result<(FourHundredMeters, GameState<Die>), ConfigError> {
        let player = PlayerName::new(&self.player)?;
        let config = GameConfig::new(
            GameKind::FourHundredMeters,
            player.clone(),
            self.rounds as usize * PAIR,
            self.rounds,
        )
        .with_rerolls(self.rerolls);
        config.validate()?;

        let dice = (0..config.dice)
            .map(|position| match self.penalty {
                PenaltyDice::SecondOnly if position % PAIR == 0 => Die::new(FaceSet::STANDARD),
                _ => Die::new(SPRINT_FACES),
            })
            .collect();

        let state = GameState::new(player, dice, self.rerolls, rng);
        Ok((FourHundredMeters { config }, state))
    }
}

impl FourHundredMeters {
    /// Die positions of the current round.
    #[must_use]
    pub fn pair(&self, state: &GameState<Die>) -> std::ops::Range<usize> {
        let first = state.round as usize * PAIR;
        first..first + PAIR
    }
}

impl RulesEngine for FourHundredMeters {
    type Die = Die;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(&self, state: &GameState<Die>, action: Action) -> Result<(), ActionError> {
        ensure_running(state)?;
        match action {
            Action::Roll if self.pair(state).end > state.dice.len() => Err(ActionError::NoDiceLeft),
            Action::Roll if state.has_rolled() && state.rerolls == 0 => Err(ActionError::NoRerolls),
            Action::Roll => Ok(()),
            Action::Keep if !state.has_rolled() => Err(ActionError::MustRollFirst(action)),
            Action::Keep => Ok(()),
            Action::Stop | Action::ToggleFreeze(_) => Err(ActionError::Unsupported {
                action,
                game: GameKind::FourHundredMeters.name(),
            }),
        }
    }

    fn apply_action(&self, state: &mut GameState<Die>, action: Action) -> Result<Outcome, ActionError> {
        self.validate(state, action)?;

        if action == Action::Keep {
            let kept = state.attempt_score;
            state.score += kept;
            state.history.push(kept);
            log::info!("{}: 400 meters round {} kept {}", state.player, state.round + 1, kept);
            state.round += 1;
            let finished = state.round >= self.config.rounds;
            if finished {
                state.phase = Phase::Finished;
            } else {
                state.phase = Phase::AwaitingFirstRoll;
                state.attempt_score = 0;
            }
            return Ok(Outcome::Banked {
                score: kept,
                total: state.score,
                finished,
            });
        }

        let pair = self.pair(state);
        let reroll = state.has_rolled();
        let GameState { dice, rng, rerolls, .. } = &mut *state;
        let dice = dice.get_mut(pair.clone()).ok_or(ActionError::NoDiceLeft)?;
        // first roll of a round is free
        if reroll {
            *rerolls -= 1;
        }
        let mut faces: RolledFaces = SmallVec::new();
        for die in dice {
            die.roll(rng);
            faces.extend(die.face());
        }
        state.phase = Phase::Rolled;
        state.attempt_score = state.total_at(pair);

        Ok(Outcome::Rolled {
            faces,
            value: state.attempt_score,
        })
    }

    fn candidate_actions(&self, _state: &GameState<Die>) -> Vec<Action> {
        vec![Action::Roll, Action::Keep]
    }

    fn prompt(&self, state: &GameState<Die>) -> String {
        match state.phase {
            Phase::Finished => "Game over".to_string(),
            Phase::AwaitingFirstRoll => format!("Roll to start round {}", state.round + 1),
            Phase::Rolled if state.rerolls == 0 => "No rerolls left: keep".to_string(),
            Phase::Rolled => format!("Keep or reroll ({} rerolls left)", state.rerolls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> (FourHundredMeters, GameState<Die>) {
        FourHundredMetersBuilder::new().player("Jackie").build(42).unwrap()
    }

    #[test]
    fn test_game_creation() {
        let (game, state) = game();

        assert_eq!(game.config().kind, GameKind::FourHundredMeters);
        assert_eq!(game.config().dice, 8);
        assert_eq!(game.config().rounds, 4);
        assert_eq!(state.dice.len(), 8);
        assert_eq!(state.rerolls, 5);
        assert_eq!(state.player.as_str(), "Jackie");
        assert!(state.dice.iter().all(|d| d.faces() == &SPRINT_FACES));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = FourHundredMetersBuilder::new().player("  ").build(1);
        assert!(matches!(result, Err(ConfigError::BlankName)));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let result = FourHundredMetersBuilder::new().player("A").rounds(0).build(1);
        assert!(matches!(result, Err(ConfigError::TooSmall { .. })));
    }

    #[test]
    fn test_second_only_penalty() {
        let (_, state) = FourHundredMetersBuilder::new()
            .player("A")
            .penalty_dice(PenaltyDice::SecondOnly)
            .build(1)
            .unwrap();

        for (position, die) in state.dice.iter().enumerate() {
            let expected = if position % 2 == 0 { FaceSet::STANDARD } else { SPRINT_FACES };
            assert_eq!(die.faces(), &expected);
        }
    }

    #[test]
    fn test_keep_before_roll() {
        let (game, state) = game();
        assert_eq!(
            game.validate(&state, Action::Keep),
            Err(ActionError::MustRollFirst(Action::Keep))
        );
        assert_eq!(game.legal_actions(&state), vec![Action::Roll]);
    }

    #[test]
    fn test_first_roll_is_free() {
        let (game, mut state) = game();
        state.rng.load(&[2, 3]);

        let outcome = game.apply_action(&mut state, Action::Roll).unwrap();
        assert_eq!(outcome, Outcome::Rolled { faces: SmallVec::from_slice(&[2, 3]), value: 5 });
        assert_eq!(state.rerolls, 5);
        assert_eq!(state.phase, Phase::Rolled);
        assert_eq!(game.legal_actions(&state), vec![Action::Roll, Action::Keep]);
    }

    #[test]
    fn test_reroll_spends_budget() {
        let (game, mut state) = game();
        game.apply_action(&mut state, Action::Roll).unwrap();
        game.apply_action(&mut state, Action::Roll).unwrap();
        assert_eq!(state.rerolls, 4);
    }

    #[test]
    fn test_six_is_penalty() {
        let (game, mut state) = game();
        state.rng.load(&[6, 4]);
        game.apply_action(&mut state, Action::Roll).unwrap();
        assert_eq!(state.attempt_score, -2);

        game.apply_action(&mut state, Action::Keep).unwrap();
        assert_eq!(state.score, -2);
        assert_eq!(state.round, 1);
        assert_eq!(state.phase, Phase::AwaitingFirstRoll);
    }

    #[test]
    fn test_short_state_refuses_roll() {
        let (game, _) = game();
        let (_, mut state) = FourHundredMetersBuilder::new().player("Jackie").rounds(1).build(42).unwrap();
        game.apply_action(&mut state, Action::Roll).unwrap();
        game.apply_action(&mut state, Action::Keep).unwrap();

        assert_eq!(game.validate(&state, Action::Roll), Err(ActionError::NoDiceLeft));
        assert_eq!(game.apply_action(&mut state, Action::Roll), Err(ActionError::NoDiceLeft));
        assert_eq!(state.rerolls, 5);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_unsupported_actions() {
        let (game, state) = game();
        assert!(matches!(
            game.validate(&state, Action::Stop),
            Err(ActionError::Unsupported { .. })
        ));
        assert!(matches!(
            game.validate(&state, Action::ToggleFreeze(0)),
            Err(ActionError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_prompts() {
        let (game, mut state) = game();
        assert_eq!(game.prompt(&state), "Roll to start round 1");
        game.apply_action(&mut state, Action::Roll).unwrap();
        assert_eq!(game.prompt(&state), "Keep or reroll (5 rerolls left)");
        state.rerolls = 0;
        assert_eq!(game.prompt(&state), "No rerolls left: keep");
    }
}

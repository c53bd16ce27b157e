//! Rules engine trait for the events.
//!
//! Each event implements `RulesEngine` to define:
//! - Which actions are legal in a state
//! - How an action changes the state
//! - When the game is over

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::core::action::{Action, RolledFaces};
use crate::core::config::GameConfig;
use crate::core::die::Roll;
use crate::core::error::ActionError;
use crate::core::state::GameState;
use crate::core::view::DieView;

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Dice were rolled; `value` is the roll or running attempt value.
    Rolled { faces: RolledFaces, value: i32 },
    /// Dice were rolled and the attempt is fouled.
    Fouled { faces: RolledFaces },
    /// A round or attempt was banked.
    Banked {
        /// Score credited for this round/attempt.
        score: i32,
        /// Total (400 Meters) or high score after banking.
        total: i32,
        /// The game ended with this action.
        finished: bool,
    },
    /// A die was frozen or unfrozen.
    FreezeToggled { position: usize, frozen: bool },
}

impl Outcome {
    /// Faces rolled by the action, empty if it rolled nothing.
    #[must_use]
    pub fn faces(&self) -> RolledFaces {
        match self {
            Outcome::Rolled { faces, .. } | Outcome::Fouled { faces } => faces.clone(),
            _ => SmallVec::new(),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything; `apply_action` must call it
///   first so that a refused action leaves the state untouched
/// - `candidate_actions` lists everything the event could ever accept in
///   this state; `legal_actions` filters it through `validate`
/// - `apply_action` must draw all randomness from `state.rng`
pub trait RulesEngine {
    /// Dice this event plays with.
    type Die: Roll + Clone + Debug;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Check whether `action` is allowed, without changing anything.
    fn validate(&self, state: &GameState<Self::Die>, action: Action) -> Result<(), ActionError>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState<Self::Die>,
        action: Action,
    ) -> Result<Outcome, ActionError>;

    /// Actions the event understands, before legality checks.
    fn candidate_actions(&self, state: &GameState<Self::Die>) -> Vec<Action>;

    /// Prompt to show the player.
    fn prompt(&self, state: &GameState<Self::Die>) -> String;

    // === Convenience Methods ===

    /// Actions that would be accepted right now.
    fn legal_actions(&self, state: &GameState<Self::Die>) -> Vec<Action> {
        self.candidate_actions(state)
            .into_iter()
            .filter(|&action| self.validate(state, action).is_ok())
            .collect()
    }

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState<Self::Die>) -> bool {
        state.is_finished()
    }

    /// View of the die at `position`.
    fn die_view(&self, state: &GameState<Self::Die>, position: usize) -> DieView {
        state.dice.get(position).map_or_else(DieView::default, |die| DieView {
            value: die.value(),
            face: die.face(),
            frozen: false,
            freezable: state.freezable.get(position).copied().unwrap_or(false),
            foul: die.is_foul(),
        })
    }
}

/// Refuse everything once the game is over.
pub(crate) fn ensure_running<D>(state: &GameState<D>) -> Result<(), ActionError> {
    if state.phase == crate::core::state::Phase::Finished {
        return Err(ActionError::GameOver);
    }
    Ok(())
}

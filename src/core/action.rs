//! Player actions and the per-game action log.
//!
//! Every input the presentation side can send is an [`Action`]. Games
//! decide which actions they support; the engine records each accepted
//! action as an [`ActionRecord`] together with the raw faces it rolled,
//! which is enough to replay the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll (or reroll) the dice in play.
    Roll,
    /// Bank the current roll and move to the next round (400 Meters).
    Keep,
    /// End the current attempt (Discus, Shot Put). Also acknowledges a foul.
    Stop,
    /// Freeze or unfreeze the die at a position (Discus).
    ToggleFreeze(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::Keep => write!(f, "keep"),
            Action::Stop => write!(f, "stop"),
            Action::ToggleFreeze(position) => write!(f, "freeze die {}", position),
        }
    }
}

/// Raw faces rolled by one action. At most eight dice move at once.
pub type RolledFaces = SmallVec<[u8; 8]>;

/// An accepted action with the context it was taken in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Round (0-based) when the action was taken.
    pub round: u32,

    /// Attempt (1-based) when the action was taken.
    pub attempt: u32,

    /// Position in the game's action log.
    pub sequence: u32,

    /// Faces rolled by this action, in die order. Empty for non-rolls.
    pub faces: RolledFaces,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, attempt: u32, sequence: u32, faces: RolledFaces) -> Self {
        Self {
            action,
            round,
            attempt,
            sequence,
            faces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::Stop.to_string(), "stop");
        assert_eq!(Action::ToggleFreeze(2).to_string(), "freeze die 2");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::Roll, 1, 1, 4, smallvec![3, 6]);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_toggle_freeze_serialization() {
        let json = serde_json::to_string(&Action::ToggleFreeze(3)).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Action::ToggleFreeze(3));
    }
}

//! Game configuration types.
//!
//! Each game builder produces a `GameConfig`:
//! - `GameKind`: which event is being played
//! - `PlayerName`: validated display name (trimmed, never blank)
//! - Dice, rounds and reroll counts for the rules to follow
//!
//! Configurations are serde (de)serializable so a front end can load them.
//! Deserializing re-runs the same validation as the constructors.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The three events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    FourHundredMeters,
    Discus,
    ShotPut,
}

impl GameKind {
    /// Human-readable event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::FourHundredMeters => "400 Meters",
            GameKind::Discus => "Discus",
            GameKind::ShotPut => "Shot Put",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's display name. Always trimmed and non-empty.
///
/// ```
/// use decathlon_dice::core::PlayerName;
///
/// let name = PlayerName::new("  Daley ").unwrap();
/// assert_eq!(name.as_str(), "Daley");
/// assert!(PlayerName::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate and trim a display name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ConfigError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConfigError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Name used for the computer opponent.
    #[must_use]
    pub fn computer() -> Self {
        Self("Computer".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete configuration of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Which event.
    pub kind: GameKind,

    /// Who is playing.
    pub player: PlayerName,

    /// Number of die positions on the table.
    pub dice: usize,

    /// Rounds (400 Meters) or attempts (Discus, Shot Put) per game.
    pub rounds: u32,

    /// Rerolls available for the whole game. Zero for events without rerolls.
    pub rerolls: u32,
}

impl GameConfig {
    /// Create a configuration with no rerolls.
    pub fn new(kind: GameKind, player: PlayerName, dice: usize, rounds: u32) -> Self {
        Self {
            kind,
            player,
            dice,
            rounds,
            rerolls: 0,
        }
    }

    /// Set the starting reroll budget.
    #[must_use]
    pub fn with_rerolls(mut self, rerolls: u32) -> Self {
        self.rerolls = rerolls;
        self
    }

    /// Check the counts are playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice == 0 {
            return Err(ConfigError::TooSmall {
                field: "dice",
                min: 1,
                value: self.dice,
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::TooSmall {
                field: "rounds",
                min: 1,
                value: self.rounds as usize,
            });
        }
        Ok(())
    }
}

//! Player, performance category, and the player pick used by slot editors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a player (used in selections and lookups).
pub type PlayerId = Uuid;

/// Performance tier a team/period (or a player) is labelled with.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceCategory {
    #[default]
    Messi,
    Ronaldo,
    Jags,
}

impl PerformanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceCategory::Messi => "MESSI",
            PerformanceCategory::Ronaldo => "RONALDO",
            PerformanceCategory::Jags => "JAGS",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MESSI" => Ok(PerformanceCategory::Messi),
            "RONALDO" => Ok(PerformanceCategory::Ronaldo),
            "JAGS" => Ok(PerformanceCategory::Jags),
            other => Err(format!("unknown performance category: {other}")),
        }
    }
}

/// A player on the club roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub squad_number: Option<u32>,
    /// Current tier; history of changes lives outside this crate.
    #[serde(default)]
    pub category: PerformanceCategory,
    #[serde(default)]
    pub team_category: Option<String>,
}

impl Player {
    /// Create a new player with the given name and no squad number.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            squad_number: None,
            category: PerformanceCategory::default(),
            team_category: None,
        }
    }

    pub fn with_squad_number(mut self, number: u32) -> Self {
        self.squad_number = Some(number);
        self
    }

    /// Label shown in player pickers, e.g. "Sam (7)".
    pub fn display_name(&self) -> String {
        match self.squad_number {
            Some(n) => format!("{} ({})", self.name, n),
            None => self.name.clone(),
        }
    }
}

/// Value chosen in a slot's player picker: either nobody or a roster player.
///
/// On the wire this is the string `"unassigned"` or the player's uuid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerPick {
    #[default]
    Unassigned,
    Player(PlayerId),
}

pub const UNASSIGNED: &str = "unassigned";

impl PlayerPick {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            PlayerPick::Unassigned => None,
            PlayerPick::Player(id) => Some(*id),
        }
    }
}

impl From<PlayerId> for PlayerPick {
    fn from(id: PlayerId) -> Self {
        PlayerPick::Player(id)
    }
}

impl TryFrom<String> for PlayerPick {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == UNASSIGNED || value.is_empty() {
            return Ok(PlayerPick::Unassigned);
        }
        Uuid::parse_str(&value)
            .map(PlayerPick::Player)
            .map_err(|e| format!("invalid player id {value:?}: {e}"))
    }
}

impl From<PlayerPick> for String {
    fn from(pick: PlayerPick) -> Self {
        match pick {
            PlayerPick::Unassigned => UNASSIGNED.to_string(),
            PlayerPick::Player(id) => id.to_string(),
        }
    }
}

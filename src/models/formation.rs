//! Team formats, formation slots, and the slot identifier used by the selection store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of players a side fields.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TeamFormat {
    FourASide,
    FiveASide,
    SevenASide,
    NineASide,
    ElevenASide,
}

impl TeamFormat {
    pub const ALL: [TeamFormat; 5] = [
        TeamFormat::FourASide,
        TeamFormat::FiveASide,
        TeamFormat::SevenASide,
        TeamFormat::NineASide,
        TeamFormat::ElevenASide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamFormat::FourASide => "4-a-side",
            TeamFormat::FiveASide => "5-a-side",
            TeamFormat::SevenASide => "7-a-side",
            TeamFormat::NineASide => "9-a-side",
            TeamFormat::ElevenASide => "11-a-side",
        }
    }

    /// Players on the pitch at once.
    pub fn players_on_pitch(&self) -> usize {
        match self {
            TeamFormat::FourASide => 4,
            TeamFormat::FiveASide => 5,
            TeamFormat::SevenASide => 7,
            TeamFormat::NineASide => 9,
            TeamFormat::ElevenASide => 11,
        }
    }
}

/// Format string did not name a supported team format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown team format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for TeamFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for TeamFormat {
    type Error = UnknownFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TeamFormat> for String {
    fn from(format: TeamFormat) -> Self {
        format.as_str().to_string()
    }
}

impl fmt::Display for TeamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position opening in a format's layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FormationSlot {
    pub slot_id: &'static str,
    /// Position abbreviation, e.g. "DL".
    pub label: &'static str,
}

const SUBSTITUTE_PREFIX: &str = "sub-";

/// Where a selection sits: a starting position or a numbered substitute place.
///
/// Serialized as its key (`"gk-1"`, `"sub-2"`) so it can be a JSON map key.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Slot {
    Starter(String),
    Substitute(u32),
}

impl Slot {
    /// Slot for a catalog slot id. A `sub-<n>` id is still a substitute, so the slot
    /// is the same one it reads back as from storage.
    pub fn starter(id: impl Into<String>) -> Self {
        let id = id.into();
        Slot::parse(&id).unwrap_or(Slot::Starter(id))
    }

    /// Parse a stored slot key. `sub-<n>` is a substitute; anything else non-empty is a starter.
    pub fn parse(key: &str) -> Result<Self, String> {
        let key = key.trim();
        if key.is_empty() {
            return Err("empty slot id".to_string());
        }
        match key.strip_prefix(SUBSTITUTE_PREFIX) {
            Some(n) => n
                .parse()
                .map(Slot::Substitute)
                .map_err(|_| format!("invalid substitute slot: {key}")),
            None => Ok(Slot::Starter(key.to_string())),
        }
    }

    pub fn key(&self) -> String {
        match self {
            Slot::Starter(id) => id.clone(),
            Slot::Substitute(n) => format!("{SUBSTITUTE_PREFIX}{n}"),
        }
    }

    pub fn is_substitute(&self) -> bool {
        matches!(self, Slot::Substitute(_))
    }
}

impl TryFrom<String> for Slot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slot::parse(&value)
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.key()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

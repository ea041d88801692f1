//! Read-side rows for player metrics and analytics.

use crate::models::fixture::FixtureId;
use crate::models::player::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A player's position in one period of a fixture, joined with the fixture and period.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixturePositionRow {
    pub fixture_id: FixtureId,
    pub date: NaiveDate,
    #[serde(default)]
    pub opponent: Option<String>,
    pub position: String,
    /// Period duration; 0 when the period row is missing.
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub motm_player_id: Option<PlayerId>,
    #[serde(default)]
    pub is_captain: bool,
}

/// How well a player suits a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityRow {
    pub player_id: PlayerId,
    pub player_name: String,
    #[serde(default)]
    pub team_category: Option<String>,
    /// Position abbreviation.
    pub position: String,
    #[serde(default)]
    pub suitability_score: f64,
}

/// One rated attribute of a player (e.g. "Passing" in "TECHNICAL").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttribute {
    pub player_id: PlayerId,
    pub name: String,
    pub value: u32,
    pub category: String,
}

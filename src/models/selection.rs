//! Selections, periods, and the team-selection rows exchanged with storage.

use crate::models::formation::Slot;
use crate::models::player::{PerformanceCategory, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team number within an event (1-based).
pub type TeamId = u32;

/// Period number within an event (1-based).
pub type PeriodId = u32;

/// Unique identifier for a fixture, festival or tournament.
pub type EventId = Uuid;

/// Length of a new period when none is given.
pub const DEFAULT_PERIOD_MINUTES: u32 = 20;

/// Kind of calendar event a selection belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    #[default]
    Fixture,
    Festival,
    Tournament,
}

/// A player placed in a slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub player_id: PlayerId,
    /// Position abbreviation the player fills, e.g. "DC".
    pub position: String,
    pub performance_category: PerformanceCategory,
}

/// A playing period of an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub number: PeriodId,
    pub duration_minutes: u32,
}

/// One entry of a pitch diagram.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormationPosition {
    pub position: String,
    pub player_id: PlayerId,
}

/// Stored team-selection row, keyed by (event, team, period, slot).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSelectionRow {
    pub event_id: EventId,
    pub event_type: EventType,
    pub team_number: TeamId,
    pub period_number: PeriodId,
    pub slot: Slot,
    pub player_id: PlayerId,
    pub position: String,
    pub performance_category: PerformanceCategory,
    /// Set on the row of the team/period's captain.
    #[serde(default)]
    pub is_captain: bool,
}

/// Stored period row, upserted on (event, event_type, period_number).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub event_id: EventId,
    pub event_type: EventType,
    pub period_number: PeriodId,
    pub duration_minutes: u32,
}

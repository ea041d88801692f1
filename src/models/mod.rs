//! Data structures for team selection: players, slots, selections, fixtures, stats rows.

mod fixture;
mod formation;
mod objective;
mod player;
mod selection;
mod stats;
mod store;

pub use fixture::{Fixture, FixtureDraft, FixtureId, Outcome, TeamScore, ValidationError};
pub use formation::{FormationSlot, Slot, TeamFormat, UnknownFormat};
pub use objective::{
    ObjectiveDraft, ObjectiveId, ObjectiveStatus, PlayerObjective, DEFAULT_OBJECTIVE_POINTS,
};
pub use player::{PerformanceCategory, Player, PlayerId, PlayerPick, UNASSIGNED};
pub use selection::{
    EventId, EventType, FormationPosition, PeriodId, PeriodInfo, PeriodRecord, Selection, TeamId,
    TeamSelectionRow, DEFAULT_PERIOD_MINUTES,
};
pub use stats::{FixturePositionRow, PlayerAttribute, SuitabilityRow};
pub use store::{SelectionStore, TeamPeriod};

//! Youth football team selection: library with models, selection logic and storage collaborators.

pub mod logic;
pub mod models;
pub mod notify;
pub mod repository;
pub mod roster;
pub mod service;

pub use logic::{
    aggregate_by_fixture, captain_appearances, minutes_by_position, motm_appearances,
    player_metrics, position_title, positions_for_format, positions_for_format_name, radar_points,
    rank_by_position, recent_games, team_outcomes, top_positions, FixtureSummary, PlayerMetrics,
    PositionRecord, SaveBatch, TeamOutcome,
};
pub use models::{
    EventId, EventType, Fixture, FixtureDraft, FixtureId, FixturePositionRow, FormationPosition,
    FormationSlot, ObjectiveDraft, ObjectiveId, ObjectiveStatus, Outcome, PerformanceCategory,
    PeriodId, PeriodRecord, Player, PlayerId, PlayerObjective, PlayerPick, Selection,
    SelectionStore, Slot, TeamFormat, TeamId, TeamScore, TeamSelectionRow, ValidationError,
};
pub use notify::{LogNotifier, Notifier, NotifyError};
pub use repository::{MemoryRepository, Repository, RepositoryError};
pub use service::ServiceError;

//! Team selection logic: position catalog, reconciler, aggregation, analytics, save batches.

mod aggregation;
mod analytics;
mod catalog;
mod reconciler;
mod save;

pub use aggregation::{
    aggregate_by_fixture, captain_appearances, minutes_by_position, motm_appearances,
    player_metrics, recent_games, FixtureSummary, PlayerMetrics, PositionRecord, RecentGame,
    RECENT_GAMES_LIMIT,
};
pub use analytics::{
    radar_points, rank_by_position, team_outcomes, top_positions, PositionRanking,
    PositionRankings, RadarPoint, TeamOutcome,
};
pub use catalog::{position_title, positions_for_format, positions_for_format_name};
pub use save::SaveBatch;

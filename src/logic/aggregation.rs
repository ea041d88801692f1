//! Per-player game metrics from fixture-position rows: minutes by position, captain/MOTM counts.

use crate::models::{FixtureId, FixturePositionRow, PlayerId};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One position a player filled in one fixture (one period, usually).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PositionRecord {
    pub fixture_id: FixtureId,
    pub position: String,
    pub minutes: u32,
    /// Fixture-level flag: the player was that fixture's MOTM.
    pub is_motm: bool,
    pub is_captain: bool,
}

impl PositionRecord {
    /// Record for `player_id`; MOTM is true when the fixture's MOTM is this player.
    pub fn for_player(row: &FixturePositionRow, player_id: PlayerId) -> Self {
        Self {
            fixture_id: row.fixture_id,
            position: row.position.clone(),
            minutes: row.minutes,
            is_motm: row.motm_player_id == Some(player_id),
            is_captain: row.is_captain,
        }
    }
}

/// Totals for one fixture.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FixtureSummary {
    pub total_minutes: u32,
    /// Exact position strings; no case folding.
    pub positions_minutes: BTreeMap<String, u32>,
    pub is_motm: bool,
    pub is_captain: bool,
}

/// Group records by fixture, summing minutes overall and per position.
pub fn aggregate_by_fixture(records: &[PositionRecord]) -> BTreeMap<FixtureId, FixtureSummary> {
    let mut out: BTreeMap<FixtureId, FixtureSummary> = BTreeMap::new();
    for r in records {
        let summary = out.entry(r.fixture_id).or_default();
        summary.total_minutes += r.minutes;
        *summary.positions_minutes.entry(r.position.clone()).or_insert(0) += r.minutes;
        summary.is_motm |= r.is_motm;
        summary.is_captain |= r.is_captain;
    }
    out
}

/// Minutes per position across all records.
pub fn minutes_by_position(records: &[PositionRecord]) -> BTreeMap<String, u32> {
    let mut out = BTreeMap::new();
    for r in records {
        *out.entry(r.position.clone()).or_insert(0) += r.minutes;
    }
    out
}

/// Distinct fixtures in which the player was MOTM.
pub fn motm_appearances(records: &[PositionRecord]) -> usize {
    distinct_fixtures(records, |r| r.is_motm)
}

/// Distinct fixtures in which the player captained.
pub fn captain_appearances(records: &[PositionRecord]) -> usize {
    distinct_fixtures(records, |r| r.is_captain)
}

fn distinct_fixtures(records: &[PositionRecord], pred: impl Fn(&PositionRecord) -> bool) -> usize {
    records
        .iter()
        .filter(|r| pred(r))
        .map(|r| r.fixture_id)
        .collect::<BTreeSet<_>>()
        .len()
}

/// A fixture in the player's "recent games" list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RecentGame {
    pub fixture_id: FixtureId,
    pub date: NaiveDate,
    pub opponent: Option<String>,
    /// Positions played, in row order, without repeats.
    pub positions: Vec<String>,
    pub minutes: u32,
}

/// Latest fixtures first, at most `limit`. Same-date fixtures are ordered by fixture id.
pub fn recent_games(rows: &[FixturePositionRow], limit: usize) -> Vec<RecentGame> {
    let mut by_fixture: BTreeMap<FixtureId, RecentGame> = BTreeMap::new();
    for row in rows {
        let game = by_fixture.entry(row.fixture_id).or_insert_with(|| RecentGame {
            fixture_id: row.fixture_id,
            date: row.date,
            opponent: row.opponent.clone(),
            positions: Vec::new(),
            minutes: 0,
        });
        if !game.positions.contains(&row.position) {
            game.positions.push(row.position.clone());
        }
        game.minutes += row.minutes;
    }
    let mut games: Vec<RecentGame> = by_fixture.into_values().collect();
    games.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.fixture_id.cmp(&b.fixture_id)));
    games.truncate(limit);
    games
}

/// Number of games shown in a player's recent list.
pub const RECENT_GAMES_LIMIT: usize = 5;

/// Everything the player page shows under "Game Metrics".
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerMetrics {
    pub player_id: PlayerId,
    pub appearances: usize,
    pub total_minutes: u32,
    pub minutes_by_position: BTreeMap<String, u32>,
    pub captain_appearances: usize,
    pub motm_appearances: usize,
    pub recent_games: Vec<RecentGame>,
}

/// Aggregate a player's fixture-position rows.
pub fn player_metrics(player_id: PlayerId, rows: &[FixturePositionRow]) -> PlayerMetrics {
    let records: Vec<PositionRecord> = rows
        .iter()
        .map(|row| PositionRecord::for_player(row, player_id))
        .collect();
    let by_fixture = aggregate_by_fixture(&records);
    PlayerMetrics {
        player_id,
        appearances: by_fixture.len(),
        total_minutes: by_fixture.values().map(|s| s.total_minutes).sum(),
        minutes_by_position: minutes_by_position(&records),
        captain_appearances: captain_appearances(&records),
        motm_appearances: motm_appearances(&records),
        recent_games: recent_games(rows, RECENT_GAMES_LIMIT),
    }
}

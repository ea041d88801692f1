//! Analytics views: team outcomes, position rankings, radar data.

use crate::logic::catalog::position_title;
use crate::models::{Outcome, PlayerAttribute, PlayerId, SuitabilityRow, TeamId, TeamScore};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Score line for one of our teams.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TeamOutcome {
    pub team_number: TeamId,
    pub ours: u32,
    pub theirs: u32,
    pub outcome: Outcome,
}

/// Outcome per recorded team score. Team `n` is scored against team `n + 1`'s entry (0 if none).
pub fn team_outcomes(scores: &[TeamScore]) -> Vec<TeamOutcome> {
    scores
        .iter()
        .map(|s| {
            let theirs = scores
                .iter()
                .find(|o| o.team_number == s.team_number + 1)
                .map_or(0, |o| o.score);
            TeamOutcome {
                team_number: s.team_number,
                ours: s.score,
                theirs,
                outcome: Outcome::from_scores(s.score, theirs),
            }
        })
        .collect()
}

/// A player's rank entry under one position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionRanking {
    pub player_id: PlayerId,
    pub player_name: String,
    pub suitability_score: f64,
    pub team_category: Option<String>,
}

/// Rankings for one position, with its full title when known.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionRankings {
    pub position: String,
    pub title: String,
    pub players: Vec<PositionRanking>,
}

fn by_score_then_name(a: &PositionRanking, b: &PositionRanking) -> Ordering {
    b.suitability_score
        .total_cmp(&a.suitability_score)
        .then_with(|| a.player_name.cmp(&b.player_name))
}

/// Group suitability rows by position, best first. `team_category` keeps only that category's players.
pub fn rank_by_position(rows: &[SuitabilityRow], team_category: Option<&str>) -> Vec<PositionRankings> {
    let mut grouped: BTreeMap<&str, Vec<PositionRanking>> = BTreeMap::new();
    for row in rows {
        if let Some(category) = team_category {
            if row.team_category.as_deref() != Some(category) {
                continue;
            }
        }
        grouped.entry(row.position.as_str()).or_default().push(PositionRanking {
            player_id: row.player_id,
            player_name: row.player_name.clone(),
            suitability_score: row.suitability_score,
            team_category: row.team_category.clone(),
        });
    }
    grouped
        .into_iter()
        .map(|(position, mut players)| {
            players.sort_by(by_score_then_name);
            PositionRankings {
                position: position.to_string(),
                title: position_title(position).unwrap_or(position).to_string(),
                players,
            }
        })
        .collect()
}

/// A player's best `n` positions by suitability.
pub fn top_positions(rows: &[SuitabilityRow], player_id: PlayerId, n: usize) -> Vec<(String, f64)> {
    let mut mine: Vec<_> = rows
        .iter()
        .filter(|r| r.player_id == player_id)
        .map(|r| (r.position.clone(), r.suitability_score))
        .collect();
    mine.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    mine.truncate(n);
    mine
}

/// One spoke of a radar chart.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RadarPoint {
    pub name: String,
    pub value: u32,
}

/// Attributes of one category as radar points, in input order.
pub fn radar_points(attributes: &[PlayerAttribute], category: &str) -> Vec<RadarPoint> {
    attributes
        .iter()
        .filter(|a| a.category == category)
        .map(|a| RadarPoint {
            name: a.name.clone(),
            value: a.value,
        })
        .collect()
}

//! Integration tests for player game metrics.

use chrono::NaiveDate;
use football_team_web::{
    aggregate_by_fixture, captain_appearances, motm_appearances, player_metrics, recent_games,
    FixturePositionRow, PositionRecord,
};
use uuid::Uuid;

fn record(fixture_id: Uuid, position: &str, minutes: u32, is_motm: bool) -> PositionRecord {
    PositionRecord {
        fixture_id,
        position: position.to_string(),
        minutes,
        is_motm,
        is_captain: false,
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn row(fixture_id: Uuid, day: u32, position: &str, minutes: u32) -> FixturePositionRow {
    FixturePositionRow {
        fixture_id,
        date: date(day),
        opponent: Some(format!("Opponent {day}")),
        position: position.to_string(),
        minutes,
        motm_player_id: None,
        is_captain: false,
    }
}

#[test]
fn aggregate_sums_minutes_per_fixture_and_position() {
    let f1 = Uuid::new_v4();
    let records = vec![record(f1, "DEF", 20, true), record(f1, "FWD", 15, true)];

    let out = aggregate_by_fixture(&records);

    assert_eq!(out.len(), 1);
    let s = &out[&f1];
    assert_eq!(s.total_minutes, 35);
    assert_eq!(s.positions_minutes.len(), 2);
    assert_eq!(s.positions_minutes["DEF"], 20);
    assert_eq!(s.positions_minutes["FWD"], 15);
    assert!(s.is_motm);
    assert!(!s.is_captain);
}

#[test]
fn aggregate_keeps_position_case() {
    let f1 = Uuid::new_v4();
    let records = vec![record(f1, "dc", 10, false), record(f1, "DC", 10, false)];

    let s = &aggregate_by_fixture(&records)[&f1];

    assert_eq!(s.positions_minutes.len(), 2);
}

#[test]
fn motm_counted_once_per_fixture() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let records = vec![
        record(a, "DEF", 20, true),
        record(a, "MID", 20, true),
        record(b, "MID", 20, false),
    ];

    assert_eq!(motm_appearances(&records), 1);
}

#[test]
fn captain_counted_once_per_fixture() {
    let a = Uuid::new_v4();
    let mut records = vec![record(a, "DEF", 20, false), record(a, "MID", 20, false)];
    for r in &mut records {
        r.is_captain = true;
    }

    assert_eq!(captain_appearances(&records), 1);
    assert!(aggregate_by_fixture(&records)[&a].is_captain);
}

#[test]
fn record_for_player_sets_motm_from_fixture() {
    let player = Uuid::new_v4();
    let other = Uuid::new_v4();
    let mut r = row(Uuid::new_v4(), 1, "GK", 20);
    r.motm_player_id = Some(player);

    assert!(PositionRecord::for_player(&r, player).is_motm);
    assert!(!PositionRecord::for_player(&r, other).is_motm);
}

#[test]
fn recent_games_latest_first_with_stable_ties() {
    let older = Uuid::new_v4();
    let same_a = Uuid::new_v4();
    let same_b = Uuid::new_v4();
    let rows = vec![
        row(older, 1, "GK", 20),
        row(same_a, 5, "DL", 20),
        row(same_b, 5, "DR", 20),
        row(same_a, 5, "DC", 10),
    ];

    let first = recent_games(&rows, 10);
    let mut reversed = rows.clone();
    reversed.reverse();
    let second = recent_games(&reversed, 10);

    let ids: Vec<_> = first.iter().map(|g| g.fixture_id).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[2], older);
    assert_eq!(ids, second.iter().map(|g| g.fixture_id).collect::<Vec<_>>());
    let a = first.iter().find(|g| g.fixture_id == same_a).unwrap();
    assert_eq!(a.minutes, 30);
}

#[test]
fn recent_games_respects_limit() {
    let rows: Vec<_> = (1..=8).map(|d| row(Uuid::new_v4(), d, "MC", 20)).collect();

    let games = recent_games(&rows, 5);

    assert_eq!(games.len(), 5);
    assert_eq!(games[0].date, date(8));
}

#[test]
fn player_metrics_summarises_rows() {
    let player = Uuid::new_v4();
    let f1 = Uuid::new_v4();
    let f2 = Uuid::new_v4();
    let mut rows = vec![
        row(f1, 1, "DL", 20),
        row(f1, 1, "DC", 15),
        row(f2, 2, "DL", 20),
    ];
    rows[0].motm_player_id = Some(player);
    rows[1].motm_player_id = Some(player);
    rows[2].is_captain = true;

    let m = player_metrics(player, &rows);

    assert_eq!(m.appearances, 2);
    assert_eq!(m.total_minutes, 55);
    assert_eq!(m.minutes_by_position["DL"], 40);
    assert_eq!(m.minutes_by_position["DC"], 15);
    assert_eq!(m.motm_appearances, 1);
    assert_eq!(m.captain_appearances, 1);
    assert_eq!(m.recent_games[0].fixture_id, f2);
}

//! Integration tests for save batches, loading editors, fixture creation and roster import.

use chrono::NaiveDate;
use football_team_web::logic::SaveBatch;
use football_team_web::models::{FixturePositionRow, PeriodRecord, PlayerAttribute, SuitabilityRow};
use football_team_web::service::{
    add_objective, create_fixture, load_fixture_report, load_objectives, load_player_metrics,
    load_selections, load_top_positions, record_team_scores, save_selections, set_objective_status,
};
use football_team_web::{
    roster, EventType, Fixture, FixtureDraft, MemoryRepository, Notifier, NotifyError,
    ObjectiveDraft, ObjectiveId, ObjectiveStatus, Outcome, PerformanceCategory, Player, PlayerId,
    PlayerObjective, PlayerPick, Repository, RepositoryError, SelectionStore, ServiceError, Slot,
    TeamScore, TeamSelectionRow, ValidationError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Storage that refuses every call.
struct DownRepository;

impl Repository for DownRepository {
    fn players(&self) -> Result<Vec<Player>, RepositoryError> {
        Err(down())
    }
    fn fixture_positions(&self, _: PlayerId) -> Result<Vec<FixturePositionRow>, RepositoryError> {
        Err(down())
    }
    fn team_selections(&self, _: Uuid, _: EventType) -> Result<Vec<TeamSelectionRow>, RepositoryError> {
        Err(down())
    }
    fn periods(&self, _: Uuid, _: EventType) -> Result<Vec<PeriodRecord>, RepositoryError> {
        Err(down())
    }
    fn suitability(&self) -> Result<Vec<SuitabilityRow>, RepositoryError> {
        Err(down())
    }
    fn attributes(&self, _: PlayerId) -> Result<Vec<PlayerAttribute>, RepositoryError> {
        Err(down())
    }
    fn save_fixture(&self, _: &Fixture) -> Result<(), RepositoryError> {
        Err(down())
    }
    fn fixture(&self, _: Uuid) -> Result<Fixture, RepositoryError> {
        Err(down())
    }
    fn team_scores(&self, _: Uuid) -> Result<Vec<TeamScore>, RepositoryError> {
        Err(down())
    }
    fn save_team_scores(&self, _: Uuid, _: &[TeamScore]) -> Result<(), RepositoryError> {
        Err(down())
    }
    fn objectives(&self, _: PlayerId) -> Result<Vec<PlayerObjective>, RepositoryError> {
        Err(down())
    }
    fn objective(&self, _: ObjectiveId) -> Result<PlayerObjective, RepositoryError> {
        Err(down())
    }
    fn save_objective(&self, _: &PlayerObjective) -> Result<(), RepositoryError> {
        Err(down())
    }
    fn delete_objective(&self, _: ObjectiveId) -> Result<(), RepositoryError> {
        Err(down())
    }
    fn apply_selection_batch(&self, _: &SaveBatch) -> Result<(), RepositoryError> {
        Err(down())
    }
}

fn down() -> RepositoryError {
    RepositoryError::Unavailable("offline".to_string())
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn fixture_created(&self, _: &Fixture) -> Result<(), NotifyError> {
        Err(NotifyError("no route".to_string()))
    }
}

#[derive(Default)]
struct CountingNotifier(AtomicUsize);

impl Notifier for CountingNotifier {
    fn fixture_created(&self, _: &Fixture) -> Result<(), NotifyError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn draft() -> FixtureDraft {
    FixtureDraft {
        date: NaiveDate::from_ymd_opt(2024, 9, 14),
        opponent: "Rovers".to_string(),
        format: "7-a-side".to_string(),
        number_of_teams: Some(2),
        is_home: true,
        ..FixtureDraft::default()
    }
}

#[test]
fn batch_has_periods_and_only_assigned_slots() {
    let event_id = Uuid::new_v4();
    let p = Uuid::new_v4();
    let mut store = SelectionStore::with_first_period(20);
    store.add_period(15);
    store.set_performance_category(1, 2, PerformanceCategory::Jags);
    store.set_selection(1, 2, Slot::starter("gk-1"), p.into(), "GK");
    store.set_selection(1, 2, Slot::starter("def-1"), PlayerPick::Unassigned, "DL");

    let batch = SaveBatch::from_store(event_id, EventType::Fixture, &store);

    assert_eq!(batch.period_upserts.len(), 2);
    assert_eq!(batch.period_upserts[1].duration_minutes, 15);
    assert_eq!(batch.inserts.len(), 1);
    let row = &batch.inserts[0];
    assert_eq!(row.team_number, 1);
    assert_eq!(row.period_number, 2);
    assert_eq!(row.player_id, p);
    assert_eq!(row.performance_category, PerformanceCategory::Jags);
}

#[test]
fn save_then_load_restores_the_editor() {
    let repo = MemoryRepository::new();
    let event_id = Uuid::new_v4();
    let p = Uuid::new_v4();
    let mut store = load_selections(&repo, event_id, EventType::Festival).unwrap();
    assert_eq!(store.periods().len(), 1);
    store.set_selection(2, 1, Slot::Substitute(1), p.into(), "SUB");
    store.set_performance_category(2, 1, PerformanceCategory::Ronaldo);

    save_selections(&repo, &SaveBatch::from_store(event_id, EventType::Festival, &store)).unwrap();
    let reloaded = load_selections(&repo, event_id, EventType::Festival).unwrap();

    assert_eq!(reloaded, store);
    // Different event type is a different event.
    assert!(repo.team_selections(event_id, EventType::Fixture).unwrap().is_empty());
}

#[test]
fn save_replaces_previous_rows() {
    let repo = MemoryRepository::new();
    let event_id = Uuid::new_v4();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut store = SelectionStore::with_first_period(20);
    store.set_selection(1, 1, Slot::starter("gk-1"), a.into(), "GK");
    save_selections(&repo, &SaveBatch::from_store(event_id, EventType::Fixture, &store)).unwrap();

    store.set_selection(1, 1, Slot::starter("gk-1"), b.into(), "GK");
    save_selections(&repo, &SaveBatch::from_store(event_id, EventType::Fixture, &store)).unwrap();

    let rows = repo.team_selections(event_id, EventType::Fixture).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, b);
    assert_eq!(repo.periods(event_id, EventType::Fixture).unwrap().len(), 1);
}

#[test]
fn removed_period_stays_removed_after_reload() {
    let repo = MemoryRepository::new();
    let event_id = Uuid::new_v4();
    let p = Uuid::new_v4();
    let mut store = SelectionStore::with_first_period(20);
    store.add_period(20);
    store.set_selection(1, 2, Slot::starter("gk-1"), p.into(), "GK");
    save_selections(&repo, &SaveBatch::from_store(event_id, EventType::Fixture, &store)).unwrap();

    store.remove_period(2);
    save_selections(&repo, &SaveBatch::from_store(event_id, EventType::Fixture, &store)).unwrap();
    let reloaded = load_selections(&repo, event_id, EventType::Fixture).unwrap();

    assert_eq!(reloaded.periods(), store.periods());
    assert_eq!(reloaded, store);
}

#[test]
fn saving_one_event_keeps_other_events_periods() {
    let repo = MemoryRepository::new();
    let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
    let mut store = SelectionStore::with_first_period(20);
    store.add_period(15);
    save_selections(&repo, &SaveBatch::from_store(first, EventType::Fixture, &store)).unwrap();

    let short = SelectionStore::with_first_period(10);
    save_selections(&repo, &SaveBatch::from_store(second, EventType::Fixture, &short)).unwrap();

    assert_eq!(repo.periods(first, EventType::Fixture).unwrap().len(), 2);
    assert_eq!(repo.periods(second, EventType::Fixture).unwrap().len(), 1);
}

#[test]
fn captain_survives_save_and_reload() {
    let repo = MemoryRepository::new();
    let event_id = Uuid::new_v4();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut store = SelectionStore::with_first_period(20);
    store.set_selection(1, 1, Slot::starter("gk-1"), a.into(), "GK");
    store.set_selection(1, 1, Slot::starter("def-1"), b.into(), "DL");
    assert!(store.set_captain(1, 1, b.into()));

    let batch = SaveBatch::from_store(event_id, EventType::Fixture, &store);
    let flagged: Vec<_> = batch.inserts.iter().filter(|r| r.is_captain).map(|r| r.player_id).collect();
    assert_eq!(flagged, vec![b]);

    save_selections(&repo, &batch).unwrap();
    let reloaded = load_selections(&repo, event_id, EventType::Fixture).unwrap();

    assert_eq!(reloaded.captain(1, 1), Some(b));
}

#[test]
fn edits_after_snapshot_are_not_saved() {
    let repo = MemoryRepository::new();
    let event_id = Uuid::new_v4();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut store = SelectionStore::with_first_period(20);
    store.set_selection(1, 1, Slot::starter("gk-1"), a.into(), "GK");
    let batch = SaveBatch::from_store(event_id, EventType::Fixture, &store);

    store.set_selection(1, 1, Slot::starter("def-1"), b.into(), "DL");
    save_selections(&repo, &batch).unwrap();

    assert_eq!(repo.team_selections(event_id, EventType::Fixture).unwrap().len(), 1);
    assert_eq!(store.selections(1, 1).count(), 2);
}

#[test]
fn failed_save_keeps_local_state() {
    let mut store = SelectionStore::with_first_period(20);
    store.set_selection(1, 1, Slot::starter("gk-1"), Uuid::new_v4().into(), "GK");
    let before = store.clone();

    let err = save_selections(&DownRepository, &SaveBatch::from_store(Uuid::new_v4(), EventType::Fixture, &store))
        .unwrap_err();

    assert!(matches!(err, ServiceError::Save(_)));
    assert_eq!(store, before);
}

#[test]
fn failed_load_is_reported() {
    let err = load_selections(&DownRepository, Uuid::new_v4(), EventType::Fixture).unwrap_err();
    assert!(matches!(err, ServiceError::Load(_)));
    assert!(err.to_string().starts_with("Could not load"));
}

#[test]
fn fixture_without_date_is_rejected_before_storage() {
    let mut d = draft();
    d.date = None;

    // DownRepository would fail any call, so an Invalid error proves none was made.
    let err = create_fixture(&DownRepository, &CountingNotifier::default(), &d).unwrap_err();

    assert_eq!(err, ServiceError::Invalid(ValidationError::MissingDate));
}

#[test]
fn fixture_validation_rules() {
    let mut d = draft();
    d.opponent = "   ".to_string();
    assert_eq!(d.validate().unwrap_err(), ValidationError::MissingOpponent);

    let mut d = draft();
    d.format = "6-a-side".to_string();
    assert!(matches!(d.validate(), Err(ValidationError::UnknownFormat(_))));

    let mut d = draft();
    d.number_of_teams = Some(0);
    assert_eq!(d.validate().unwrap_err(), ValidationError::NoTeams);
}

#[test]
fn fixture_saved_even_if_notification_fails() {
    let repo = MemoryRepository::new();

    let fixture = create_fixture(&repo, &FailingNotifier, &draft()).unwrap();

    assert_eq!(repo.fixture(fixture.id).unwrap(), fixture);
}

#[test]
fn only_new_fixtures_are_announced() {
    let repo = MemoryRepository::new();
    let notifier = CountingNotifier::default();

    let fixture = create_fixture(&repo, &notifier, &draft()).unwrap();
    let mut edit = draft();
    edit.id = Some(fixture.id);
    edit.home_score = Some(2);
    edit.away_score = Some(2);
    let edited = create_fixture(&repo, &notifier, &edit).unwrap();

    assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
    assert_eq!(edited.id, fixture.id);
    assert_eq!(edited.outcome(), Some(Outcome::Draw));
}

#[test]
fn away_fixture_outcome_uses_away_score() {
    let mut d = draft();
    d.is_home = false;
    d.home_score = Some(3);
    d.away_score = Some(1);
    d.motm_player_ids = vec![Uuid::new_v4(), Uuid::new_v4()];

    let fixture = d.validate().unwrap();

    assert_eq!(fixture.outcome(), Some(Outcome::Loss));
    assert_eq!(fixture.motm_player_id, Some(d.motm_player_ids[0]));
}

#[test]
fn metrics_join_selections_with_fixture_and_periods() {
    let repo = MemoryRepository::new();
    let player = Uuid::new_v4();
    let mut d = draft();
    d.motm_player_ids = vec![player];
    let fixture = create_fixture(&repo, &CountingNotifier::default(), &d).unwrap();

    let mut store = SelectionStore::with_first_period(20);
    store.add_period(10);
    store.set_selection(1, 1, Slot::starter("def-1"), player.into(), "DL");
    store.set_selection(1, 2, Slot::starter("mid-1"), player.into(), "MC");
    store.set_captain(1, 1, player.into());
    save_selections(&repo, &SaveBatch::from_store(fixture.id, EventType::Fixture, &store)).unwrap();

    let m = load_player_metrics(&repo, player).unwrap();

    assert_eq!(m.appearances, 1);
    assert_eq!(m.total_minutes, 30);
    assert_eq!(m.minutes_by_position["DL"], 20);
    assert_eq!(m.minutes_by_position["MC"], 10);
    assert_eq!(m.motm_appearances, 1);
    assert_eq!(m.captain_appearances, 1);
}

#[test]
fn captain_count_is_zero_without_a_captain() {
    let repo = MemoryRepository::new();
    let player = Uuid::new_v4();
    let fixture = create_fixture(&repo, &CountingNotifier::default(), &draft()).unwrap();
    let mut store = SelectionStore::with_first_period(20);
    store.set_selection(1, 1, Slot::starter("gk-1"), player.into(), "GK");
    save_selections(&repo, &SaveBatch::from_store(fixture.id, EventType::Fixture, &store)).unwrap();

    let m = load_player_metrics(&repo, player).unwrap();

    assert_eq!(m.appearances, 1);
    assert_eq!(m.captain_appearances, 0);
}

#[test]
fn form_scores_become_team_scores() {
    let repo = MemoryRepository::new();
    let mut d = draft();
    d.home_score = Some(4);
    d.away_score = Some(1);

    let fixture = create_fixture(&repo, &CountingNotifier::default(), &d).unwrap();
    let report = load_fixture_report(&repo, fixture.id).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Win));
    assert_eq!(
        report.team_scores,
        vec![
            TeamScore { team_number: 1, score: 4 },
            TeamScore { team_number: 2, score: 1 },
        ]
    );
    assert_eq!(report.team_outcomes[0].outcome, Outcome::Win);
    assert_eq!(report.team_outcomes[1].theirs, 0);
}

#[test]
fn fixture_without_scores_has_no_team_scores() {
    let repo = MemoryRepository::new();
    let fixture = create_fixture(&repo, &CountingNotifier::default(), &draft()).unwrap();

    let report = load_fixture_report(&repo, fixture.id).unwrap();

    assert_eq!(report.outcome, None);
    assert!(report.team_scores.is_empty());
    assert!(report.team_outcomes.is_empty());
}

#[test]
fn recorded_team_scores_replace_previous_ones() {
    let repo = MemoryRepository::new();
    let fixture = create_fixture(&repo, &CountingNotifier::default(), &draft()).unwrap();

    let outcomes = record_team_scores(
        &repo,
        fixture.id,
        &[
            TeamScore { team_number: 2, score: 3 },
            TeamScore { team_number: 1, score: 3 },
        ],
    )
    .unwrap();

    assert_eq!(outcomes[0].team_number, 1);
    assert_eq!(outcomes[0].outcome, Outcome::Draw);
    assert_eq!(repo.team_scores(fixture.id).unwrap().len(), 2);

    // The draft fields two teams.
    let err = record_team_scores(&repo, fixture.id, &[TeamScore { team_number: 3, score: 1 }]).unwrap_err();
    assert_eq!(err, ServiceError::Invalid(ValidationError::NoSuchTeam(3)));
    assert_eq!(repo.team_scores(fixture.id).unwrap().len(), 2);
}

#[test]
fn scores_for_an_unknown_fixture_are_not_found() {
    let err = record_team_scores(&MemoryRepository::new(), Uuid::new_v4(), &[]).unwrap_err();
    assert!(matches!(err, ServiceError::Load(RepositoryError::NotFound(_))));
}

#[test]
fn top_positions_come_from_stored_suitability() {
    let repo = MemoryRepository::new();
    let player = Uuid::new_v4();
    for (position, score) in [("GK", 40.0), ("DC", 75.0), ("MC", 60.0)] {
        repo.add_suitability(SuitabilityRow {
            player_id: player,
            player_name: "Sam".to_string(),
            team_category: None,
            position: position.to_string(),
            suitability_score: score,
        })
        .unwrap();
    }

    let top = load_top_positions(&repo, player, 2).unwrap();

    assert_eq!(top, vec![("DC".to_string(), 75.0), ("MC".to_string(), 60.0)]);
}

fn objective_draft(title: &str) -> ObjectiveDraft {
    ObjectiveDraft {
        title: title.to_string(),
        review_date: NaiveDate::from_ymd_opt(2024, 10, 1),
        ..ObjectiveDraft::default()
    }
}

#[test]
fn objectives_are_added_and_updated() {
    let repo = MemoryRepository::new();
    let player = Uuid::new_v4();

    let first = add_objective(&repo, player, &objective_draft(" Weak foot ")).unwrap();
    let second = add_objective(&repo, player, &objective_draft("Scanning")).unwrap();
    add_objective(&repo, Uuid::new_v4(), &objective_draft("Other player")).unwrap();

    assert_eq!(first.title, "Weak foot");
    assert_eq!(first.points, 5);
    assert_eq!(first.status, ObjectiveStatus::Ongoing);
    let listed = load_objectives(&repo, player).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].created_at >= listed[1].created_at);

    let done = set_objective_status(&repo, second.id, ObjectiveStatus::Complete).unwrap();
    assert_eq!(done.status, ObjectiveStatus::Complete);
    assert_eq!(repo.objective(second.id).unwrap().status, ObjectiveStatus::Complete);

    repo.delete_objective(first.id).unwrap();
    assert_eq!(load_objectives(&repo, player).unwrap().len(), 1);
    assert!(matches!(repo.delete_objective(first.id), Err(RepositoryError::NotFound(_))));
}

#[test]
fn objective_needs_title_and_review_date() {
    let player = Uuid::new_v4();
    assert_eq!(
        objective_draft("  ").validate(player).unwrap_err(),
        ValidationError::MissingTitle
    );
    let mut d = objective_draft("Pressing");
    d.review_date = None;
    let err = add_objective(&DownRepository, player, &d).unwrap_err();
    assert_eq!(err, ServiceError::Invalid(ValidationError::MissingReviewDate));
}

#[test]
fn objective_status_of_unknown_id_is_not_found() {
    let err = set_objective_status(&MemoryRepository::new(), Uuid::new_v4(), ObjectiveStatus::Improving).unwrap_err();
    assert!(matches!(err, ServiceError::Load(RepositoryError::NotFound(_))));
}

#[test]
fn roster_csv_import() {
    let data = "name,squad_number,category\nSam, 7 ,ronaldo\nAlex,,\n,3,MESSI\n";

    let players = roster::parse_roster_csv(data.as_bytes()).unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].display_name(), "Sam (7)");
    assert_eq!(players[0].category, PerformanceCategory::Ronaldo);
    assert_eq!(players[1].squad_number, None);
    assert_eq!(players[1].category, PerformanceCategory::Messi);
}

#[test]
fn player_pick_wire_format() {
    let id = Uuid::new_v4();
    let pick: PlayerPick = serde_json::from_str(&format!("\"{id}\"")).unwrap();
    assert_eq!(pick, PlayerPick::Player(id));
    let none: PlayerPick = serde_json::from_str("\"unassigned\"").unwrap();
    assert_eq!(none, PlayerPick::Unassigned);
    assert_eq!(serde_json::to_string(&none).unwrap(), "\"unassigned\"");
    let slot: Slot = serde_json::from_str("\"sub-2\"").unwrap();
    assert_eq!(slot, Slot::Substitute(2));
    let status: ObjectiveStatus = serde_json::from_str("\"IMPROVING\"").unwrap();
    assert_eq!(status, ObjectiveStatus::Improving);
}

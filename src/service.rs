//! Flows that cross the storage boundary: editors, fixtures and scores, player metrics, objectives.

use crate::logic::{player_metrics, team_outcomes, top_positions, PlayerMetrics, SaveBatch, TeamOutcome};
use crate::models::{
    EventId, EventType, Fixture, FixtureDraft, FixtureId, ObjectiveDraft, ObjectiveId,
    ObjectiveStatus, Outcome, PlayerId, PlayerObjective, SelectionStore, TeamScore,
    ValidationError, DEFAULT_PERIOD_MINUTES,
};
use crate::notify::Notifier;
use crate::repository::{Repository, RepositoryError};
use serde::Serialize;

/// Why a user action failed. None of these are fatal; each is local to one action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServiceError {
    /// Reading from storage failed; show "could not load", nothing partial.
    Load(RepositoryError),
    /// Writing to storage failed; local edits are kept for a manual retry.
    Save(RepositoryError),
    /// Input rejected before any storage call.
    Invalid(ValidationError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Load(e) => write!(f, "Could not load: {}", e),
            ServiceError::Save(e) => write!(f, "Could not save: {}", e),
            ServiceError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::Invalid(e)
    }
}

/// Load an event's stored selections into a fresh store. With nothing stored, start with one period.
pub fn load_selections(
    repo: &dyn Repository,
    event_id: EventId,
    event_type: EventType,
) -> Result<SelectionStore, ServiceError> {
    let rows = repo
        .team_selections(event_id, event_type)
        .map_err(ServiceError::Load)?;
    let periods = repo.periods(event_id, event_type).map_err(ServiceError::Load)?;
    if rows.is_empty() && periods.is_empty() {
        return Ok(SelectionStore::with_first_period(DEFAULT_PERIOD_MINUTES));
    }
    Ok(SelectionStore::from_rows(&rows, &periods))
}

/// Write a snapshot batch. The caller's store is untouched either way.
pub fn save_selections(repo: &dyn Repository, batch: &SaveBatch) -> Result<(), ServiceError> {
    repo.apply_selection_batch(batch).map_err(|e| {
        log::warn!("Saving selections for event {} failed: {}", batch.event_id, e);
        ServiceError::Save(e)
    })?;
    log::info!(
        "Saved {} selection(s) over {} period(s) for event {}",
        batch.inserts.len(),
        batch.period_upserts.len(),
        batch.event_id
    );
    Ok(())
}

/// Validate and store a fixture, then notify. A failed notification does not fail the save.
///
/// Entered home/away scores are also stored as the scores of teams 1 and 2.
pub fn create_fixture(
    repo: &dyn Repository,
    notifier: &dyn Notifier,
    draft: &FixtureDraft,
) -> Result<Fixture, ServiceError> {
    let fixture = draft.validate()?;
    let is_new = draft.id.is_none();
    repo.save_fixture(&fixture).map_err(ServiceError::Save)?;
    let scores = fixture.form_team_scores();
    if !scores.is_empty() {
        repo.save_team_scores(fixture.id, &scores)
            .map_err(ServiceError::Save)?;
    }
    if is_new {
        if let Err(e) = notifier.fixture_created(&fixture) {
            log::warn!("Fixture {} saved but notification failed: {}", fixture.id, e);
        }
    }
    Ok(fixture)
}

/// Game metrics for a player page.
pub fn load_player_metrics(repo: &dyn Repository, player_id: PlayerId) -> Result<PlayerMetrics, ServiceError> {
    let rows = repo.fixture_positions(player_id).map_err(ServiceError::Load)?;
    Ok(player_metrics(player_id, &rows))
}

/// A fixture with its overall outcome and the result of each team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FixtureReport {
    pub fixture: Fixture,
    pub outcome: Option<Outcome>,
    pub team_scores: Vec<TeamScore>,
    pub team_outcomes: Vec<TeamOutcome>,
}

pub fn load_fixture_report(repo: &dyn Repository, fixture_id: FixtureId) -> Result<FixtureReport, ServiceError> {
    let fixture = repo.fixture(fixture_id).map_err(ServiceError::Load)?;
    let team_scores = repo.team_scores(fixture_id).map_err(ServiceError::Load)?;
    Ok(FixtureReport {
        outcome: fixture.outcome(),
        team_outcomes: team_outcomes(&team_scores),
        team_scores,
        fixture,
    })
}

/// Replace a fixture's per-team scores. Every team number must be one the fixture fields.
pub fn record_team_scores(
    repo: &dyn Repository,
    fixture_id: FixtureId,
    scores: &[TeamScore],
) -> Result<Vec<TeamOutcome>, ServiceError> {
    let fixture = repo.fixture(fixture_id).map_err(ServiceError::Load)?;
    if let Some(bad) = scores
        .iter()
        .find(|s| s.team_number == 0 || s.team_number > fixture.number_of_teams)
    {
        return Err(ServiceError::Invalid(ValidationError::NoSuchTeam(bad.team_number)));
    }
    let mut scores = scores.to_vec();
    scores.sort_by_key(|s| s.team_number);
    scores.dedup_by_key(|s| s.team_number);
    repo.save_team_scores(fixture_id, &scores)
        .map_err(ServiceError::Save)?;
    log::info!("Recorded {} team score(s) for fixture {}", scores.len(), fixture_id);
    Ok(team_outcomes(&scores))
}

/// A player's best positions by suitability score.
pub fn load_top_positions(
    repo: &dyn Repository,
    player_id: PlayerId,
    limit: usize,
) -> Result<Vec<(String, f64)>, ServiceError> {
    let rows = repo.suitability().map_err(ServiceError::Load)?;
    Ok(top_positions(&rows, player_id, limit))
}

pub fn load_objectives(repo: &dyn Repository, player_id: PlayerId) -> Result<Vec<PlayerObjective>, ServiceError> {
    repo.objectives(player_id).map_err(ServiceError::Load)
}

/// Validate and store a new objective for a player.
pub fn add_objective(
    repo: &dyn Repository,
    player_id: PlayerId,
    draft: &ObjectiveDraft,
) -> Result<PlayerObjective, ServiceError> {
    let objective = draft.validate(player_id)?;
    repo.save_objective(&objective).map_err(ServiceError::Save)?;
    Ok(objective)
}

pub fn set_objective_status(
    repo: &dyn Repository,
    id: ObjectiveId,
    status: ObjectiveStatus,
) -> Result<PlayerObjective, ServiceError> {
    let mut objective = repo.objective(id).map_err(ServiceError::Load)?;
    objective.status = status;
    repo.save_objective(&objective).map_err(ServiceError::Save)?;
    Ok(objective)
}

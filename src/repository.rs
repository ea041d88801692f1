//! Storage collaborator: the rows this app reads and writes, and an in-memory implementation.

use crate::logic::SaveBatch;
use crate::models::{
    EventId, EventType, Fixture, FixtureId, FixturePositionRow, ObjectiveId, PeriodRecord, Player,
    PlayerAttribute, PlayerId, PlayerObjective, SuitabilityRow, TeamScore, TeamSelectionRow,
};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A storage call failed. Calls are not retried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RepositoryError {
    /// Storage could not be reached or refused the call.
    Unavailable(String),
    /// A referenced row does not exist.
    NotFound(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            RepositoryError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Row-based storage the selection editor and metrics views talk to.
pub trait Repository: Send + Sync {
    /// Roster, ordered by name.
    fn players(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Positions a player filled in fixtures, joined with fixture and period.
    fn fixture_positions(&self, player_id: PlayerId) -> Result<Vec<FixturePositionRow>, RepositoryError>;

    fn team_selections(&self, event_id: EventId, event_type: EventType) -> Result<Vec<TeamSelectionRow>, RepositoryError>;

    fn periods(&self, event_id: EventId, event_type: EventType) -> Result<Vec<PeriodRecord>, RepositoryError>;

    fn suitability(&self) -> Result<Vec<SuitabilityRow>, RepositoryError>;

    fn attributes(&self, player_id: PlayerId) -> Result<Vec<PlayerAttribute>, RepositoryError>;

    /// Insert or update a fixture by id.
    fn save_fixture(&self, fixture: &Fixture) -> Result<(), RepositoryError>;

    fn fixture(&self, id: FixtureId) -> Result<Fixture, RepositoryError>;

    /// Per-team scores of a fixture, by team number.
    fn team_scores(&self, fixture_id: FixtureId) -> Result<Vec<TeamScore>, RepositoryError>;

    /// Replace a fixture's per-team scores.
    fn save_team_scores(&self, fixture_id: FixtureId, scores: &[TeamScore]) -> Result<(), RepositoryError>;

    /// A player's objectives, newest first.
    fn objectives(&self, player_id: PlayerId) -> Result<Vec<PlayerObjective>, RepositoryError>;

    fn objective(&self, id: ObjectiveId) -> Result<PlayerObjective, RepositoryError>;

    /// Insert or update an objective by id.
    fn save_objective(&self, objective: &PlayerObjective) -> Result<(), RepositoryError>;

    fn delete_objective(&self, id: ObjectiveId) -> Result<(), RepositoryError>;

    /// Replace the batch's event: its period rows become exactly `period_upserts`
    /// and its team selections exactly `inserts`.
    fn apply_selection_batch(&self, batch: &SaveBatch) -> Result<(), RepositoryError>;
}

#[derive(Default)]
struct Tables {
    players: Vec<Player>,
    fixtures: HashMap<FixtureId, Fixture>,
    selections: Vec<TeamSelectionRow>,
    periods: Vec<PeriodRecord>,
    team_scores: HashMap<FixtureId, Vec<TeamScore>>,
    objectives: Vec<PlayerObjective>,
    suitability: Vec<SuitabilityRow>,
    attributes: Vec<PlayerAttribute>,
}

/// Storage held in process memory. Lost on restart.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock error".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock error".to_string()))
    }

    pub fn add_player(&self, player: Player) -> Result<(), RepositoryError> {
        self.write()?.players.push(player);
        Ok(())
    }

    pub fn add_suitability(&self, row: SuitabilityRow) -> Result<(), RepositoryError> {
        self.write()?.suitability.push(row);
        Ok(())
    }

    pub fn add_attribute(&self, attribute: PlayerAttribute) -> Result<(), RepositoryError> {
        self.write()?.attributes.push(attribute);
        Ok(())
    }
}

impl Repository for MemoryRepository {
    fn players(&self) -> Result<Vec<Player>, RepositoryError> {
        let mut players = self.read()?.players.clone();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    fn fixture_positions(&self, player_id: PlayerId) -> Result<Vec<FixturePositionRow>, RepositoryError> {
        let t = self.read()?;
        let rows = t
            .selections
            .iter()
            .filter(|s| s.event_type == EventType::Fixture && s.player_id == player_id)
            .filter_map(|s| {
                let fixture = t.fixtures.get(&s.event_id)?;
                let minutes = t
                    .periods
                    .iter()
                    .find(|p| {
                        p.event_id == s.event_id
                            && p.event_type == s.event_type
                            && p.period_number == s.period_number
                    })
                    .map_or(0, |p| p.duration_minutes);
                Some(FixturePositionRow {
                    fixture_id: fixture.id,
                    date: fixture.date,
                    opponent: Some(fixture.opponent.clone()),
                    position: s.position.clone(),
                    minutes,
                    motm_player_id: fixture.motm_player_id,
                    is_captain: s.is_captain,
                })
            })
            .collect();
        Ok(rows)
    }

    fn team_selections(&self, event_id: EventId, event_type: EventType) -> Result<Vec<TeamSelectionRow>, RepositoryError> {
        Ok(self
            .read()?
            .selections
            .iter()
            .filter(|s| s.event_id == event_id && s.event_type == event_type)
            .cloned()
            .collect())
    }

    fn periods(&self, event_id: EventId, event_type: EventType) -> Result<Vec<PeriodRecord>, RepositoryError> {
        Ok(self
            .read()?
            .periods
            .iter()
            .filter(|p| p.event_id == event_id && p.event_type == event_type)
            .cloned()
            .collect())
    }

    fn suitability(&self) -> Result<Vec<SuitabilityRow>, RepositoryError> {
        Ok(self.read()?.suitability.clone())
    }

    fn attributes(&self, player_id: PlayerId) -> Result<Vec<PlayerAttribute>, RepositoryError> {
        Ok(self
            .read()?
            .attributes
            .iter()
            .filter(|a| a.player_id == player_id)
            .cloned()
            .collect())
    }

    fn save_fixture(&self, fixture: &Fixture) -> Result<(), RepositoryError> {
        self.write()?.fixtures.insert(fixture.id, fixture.clone());
        Ok(())
    }

    fn fixture(&self, id: FixtureId) -> Result<Fixture, RepositoryError> {
        self.read()?
            .fixtures
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("fixture {}", id)))
    }

    fn team_scores(&self, fixture_id: FixtureId) -> Result<Vec<TeamScore>, RepositoryError> {
        let mut scores = self
            .read()?
            .team_scores
            .get(&fixture_id)
            .cloned()
            .unwrap_or_default();
        scores.sort_by_key(|s| s.team_number);
        Ok(scores)
    }

    fn save_team_scores(&self, fixture_id: FixtureId, scores: &[TeamScore]) -> Result<(), RepositoryError> {
        self.write()?.team_scores.insert(fixture_id, scores.to_vec());
        Ok(())
    }

    fn objectives(&self, player_id: PlayerId) -> Result<Vec<PlayerObjective>, RepositoryError> {
        let mut objectives: Vec<_> = self
            .read()?
            .objectives
            .iter()
            .filter(|o| o.player_id == player_id)
            .cloned()
            .collect();
        objectives.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(objectives)
    }

    fn objective(&self, id: ObjectiveId) -> Result<PlayerObjective, RepositoryError> {
        self.read()?
            .objectives
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("objective {}", id)))
    }

    fn save_objective(&self, objective: &PlayerObjective) -> Result<(), RepositoryError> {
        let mut t = self.write()?;
        match t.objectives.iter().position(|o| o.id == objective.id) {
            Some(idx) => t.objectives[idx] = objective.clone(),
            None => t.objectives.push(objective.clone()),
        }
        Ok(())
    }

    fn delete_objective(&self, id: ObjectiveId) -> Result<(), RepositoryError> {
        let mut t = self.write()?;
        let before = t.objectives.len();
        t.objectives.retain(|o| o.id != id);
        if t.objectives.len() == before {
            return Err(RepositoryError::NotFound(format!("objective {}", id)));
        }
        Ok(())
    }

    fn apply_selection_batch(&self, batch: &SaveBatch) -> Result<(), RepositoryError> {
        let mut t = self.write()?;
        t.periods.retain(|p| {
            !(p.event_id == batch.event_id && p.event_type == batch.event_type)
                || batch
                    .period_upserts
                    .iter()
                    .any(|u| u.period_number == p.period_number)
        });
        for record in &batch.period_upserts {
            let existing = t.periods.iter().position(|p| {
                p.event_id == record.event_id
                    && p.event_type == record.event_type
                    && p.period_number == record.period_number
            });
            match existing {
                Some(idx) => t.periods[idx].duration_minutes = record.duration_minutes,
                None => t.periods.push(record.clone()),
            }
        }
        t.selections
            .retain(|s| !(s.event_id == batch.event_id && s.event_type == batch.event_type));
        t.selections.extend(batch.inserts.iter().cloned());
        Ok(())
    }
}

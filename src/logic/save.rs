//! Save: turn an editor's store into the full-replace batch written to storage.

use crate::models::{EventId, EventType, PeriodRecord, SelectionStore, TeamSelectionRow};
use serde::Serialize;

/// Everything one save writes for an event.
///
/// Applied as a full replace for (`event_id`, `event_type`): upsert `period_upserts` and
/// delete the event's other period rows, delete all its team selections, then insert `inserts`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SaveBatch {
    pub event_id: EventId,
    pub event_type: EventType,
    pub period_upserts: Vec<PeriodRecord>,
    pub inserts: Vec<TeamSelectionRow>,
}

impl SaveBatch {
    /// Snapshot the store. Later edits to the store are not part of this batch.
    pub fn from_store(event_id: EventId, event_type: EventType, store: &SelectionStore) -> Self {
        let period_upserts = store
            .periods()
            .iter()
            .map(|p| PeriodRecord {
                event_id,
                event_type,
                period_number: p.number,
                duration_minutes: p.duration_minutes,
            })
            .collect();
        let inserts = store
            .iter()
            .map(|(team, period, slot, sel)| TeamSelectionRow {
                event_id,
                event_type,
                team_number: team,
                period_number: period,
                slot: slot.clone(),
                player_id: sel.player_id,
                position: sel.position.clone(),
                performance_category: store.performance_category(team, period),
                is_captain: store.captain(team, period) == Some(sel.player_id),
            })
            .collect();
        Self {
            event_id,
            event_type,
            period_upserts,
            inserts,
        }
    }
}

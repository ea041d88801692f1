//! Selection reconciler: apply slot edits, category changes and period deletes to a SelectionStore.

use crate::logic::catalog::positions_for_format;
use crate::models::{
    FormationPosition, PerformanceCategory, PeriodId, PeriodRecord, PlayerId, PlayerPick,
    Selection, SelectionStore, Slot, TeamFormat, TeamId, TeamSelectionRow, DEFAULT_PERIOD_MINUTES,
};
use std::collections::BTreeSet;

impl SelectionStore {
    /// Build a store from stored rows, e.g. when reopening an event's selections.
    ///
    /// Period lengths come from `periods`; periods that only appear in `rows` get the default length.
    /// Rows go through the same rules as [`SelectionStore::set_selection`]: the first row seen for a
    /// team/period sets its category, and a player listed in two slots keeps only the later one.
    pub fn from_rows(rows: &[TeamSelectionRow], periods: &[PeriodRecord]) -> Self {
        let mut store = Self::new();
        for p in periods {
            store.ensure_period(p.period_number, p.duration_minutes);
        }
        let mut seen = BTreeSet::new();
        for row in rows {
            let (team, period) = (row.team_number, row.period_number);
            if seen.insert((team, period)) {
                store.ensure_period(period, DEFAULT_PERIOD_MINUTES);
                store.team_period_mut(team, period).performance_category = row.performance_category;
            }
            store.place(team, period, row.slot.clone(), row.player_id, row.position.clone());
            if row.is_captain {
                store.team_period_mut(team, period).captain = Some(row.player_id);
            }
        }
        for periods in store.teams.values_mut() {
            for tp in periods.values_mut() {
                tp.drop_stale_captain();
            }
        }
        store.recompute_selected_players();
        store
    }

    /// Put a player in a slot, or free the slot with [`PlayerPick::Unassigned`].
    ///
    /// The new selection takes the team/period's current category. A player holds at most one
    /// slot per team/period: picking them here clears any other slot they had in the same
    /// team/period. The same player may still appear in other teams or periods.
    /// A captain who loses their last slot here is no longer captain.
    pub fn set_selection(
        &mut self,
        team: TeamId,
        period: PeriodId,
        slot: Slot,
        pick: PlayerPick,
        position: impl Into<String>,
    ) {
        match pick {
            PlayerPick::Unassigned => {
                self.ensure_period(period, DEFAULT_PERIOD_MINUTES);
                let tp = self.team_period_mut(team, period);
                tp.selections.remove(&slot);
                tp.drop_stale_captain();
            }
            PlayerPick::Player(player_id) => self.place(team, period, slot, player_id, position.into()),
        }
        self.recompute_selected_players();
    }

    /// Make a selected player captain of their team/period, or clear it with [`PlayerPick::Unassigned`].
    ///
    /// Returns false, changing nothing, when the player holds no slot in that team/period.
    pub fn set_captain(&mut self, team: TeamId, period: PeriodId, pick: PlayerPick) -> bool {
        match pick {
            PlayerPick::Unassigned => {
                if let Some(tp) = self.teams.get_mut(&team).and_then(|p| p.get_mut(&period)) {
                    tp.captain = None;
                }
                true
            }
            PlayerPick::Player(player_id) => {
                match self.teams.get_mut(&team).and_then(|p| p.get_mut(&period)) {
                    Some(tp) if tp.holds(player_id) => {
                        tp.captain = Some(player_id);
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Set the category of a team/period and rewrite it on every selection there.
    pub fn set_performance_category(&mut self, team: TeamId, period: PeriodId, category: PerformanceCategory) {
        self.ensure_period(period, DEFAULT_PERIOD_MINUTES);
        let tp = self.team_period_mut(team, period);
        tp.performance_category = category;
        for sel in tp.selections.values_mut() {
            sel.performance_category = category;
        }
    }

    /// Drop one team's selections for a period. Unknown team or period is a no-op.
    pub fn delete_period(&mut self, team: TeamId, period: PeriodId) {
        if let Some(periods) = self.teams.get_mut(&team) {
            periods.remove(&period);
            if periods.is_empty() {
                self.teams.remove(&team);
            }
        }
        self.recompute_selected_players();
    }

    /// Remove a period for every team, including its entry in the period list.
    pub fn remove_period(&mut self, period: PeriodId) {
        self.periods.retain(|p| p.number != period);
        for periods in self.teams.values_mut() {
            periods.remove(&period);
        }
        self.teams.retain(|_, periods| !periods.is_empty());
        self.recompute_selected_players();
    }

    /// Pitch diagram entries for a team/period: starters only, in the format's catalog order
    /// (goalkeeper first). Slots the catalog does not list come last, by slot id.
    pub fn to_formation_view(&self, team: TeamId, period: PeriodId, format: TeamFormat) -> Vec<FormationPosition> {
        let catalog = positions_for_format(format);
        let rank = |slot: &Slot| {
            let key = slot.key();
            let idx = catalog.iter().position(|s| s.slot_id == key).unwrap_or(catalog.len());
            (idx, key)
        };
        let mut starters: Vec<_> = self
            .selections(team, period)
            .filter(|(slot, _)| !slot.is_substitute())
            .map(|(slot, sel)| (rank(slot), sel))
            .collect();
        starters.sort_by(|a, b| a.0.cmp(&b.0));
        starters
            .into_iter()
            .map(|(_, sel)| FormationPosition {
                position: sel.position.clone(),
                player_id: sel.player_id,
            })
            .collect()
    }

    /// Insert a player's selection, clearing any other slot they hold in the team/period.
    fn place(&mut self, team: TeamId, period: PeriodId, slot: Slot, player_id: PlayerId, position: String) {
        self.ensure_period(period, DEFAULT_PERIOD_MINUTES);
        let tp = self.team_period_mut(team, period);
        let before = tp.selections.len();
        tp.selections
            .retain(|s, sel| *s == slot || sel.player_id != player_id);
        if tp.selections.len() != before {
            log::debug!("Moved player {} to slot {} in team {} period {}", player_id, slot, team, period);
        }
        let performance_category = tp.performance_category;
        tp.selections.insert(
            slot,
            Selection {
                player_id,
                position,
                performance_category,
            },
        );
        tp.drop_stale_captain();
    }

    fn recompute_selected_players(&mut self) {
        let selected: BTreeSet<_> = self.iter().map(|(_, _, _, sel)| sel.player_id).collect();
        self.selected_players = selected;
    }
}

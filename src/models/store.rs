//! SelectionStore: every team's selections for every period of one event.

use crate::models::formation::Slot;
use crate::models::player::{PerformanceCategory, PlayerId};
use crate::models::selection::{PeriodId, PeriodInfo, Selection, TeamId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One team's line-up for one period. All selections share the period's category.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TeamPeriod {
    pub performance_category: PerformanceCategory,
    pub selections: BTreeMap<Slot, Selection>,
    /// Always one of the players in `selections`.
    pub captain: Option<PlayerId>,
}

impl TeamPeriod {
    pub fn holds(&self, player: PlayerId) -> bool {
        self.selections.values().any(|s| s.player_id == player)
    }

    /// Clear the captain if they no longer hold a slot here.
    pub(crate) fn drop_stale_captain(&mut self) {
        if self.captain.is_some_and(|c| !self.holds(c)) {
            self.captain = None;
        }
    }
}

/// In-memory selection state owned by one editor.
///
/// Mutations go through the reconciler methods (`set_selection`, `set_performance_category`,
/// `delete_period`, ...), which keep `selected_players` in step with the selections.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SelectionStore {
    pub(crate) teams: BTreeMap<TeamId, BTreeMap<PeriodId, TeamPeriod>>,
    /// Sorted by period number.
    pub(crate) periods: Vec<PeriodInfo>,
    /// Union of every selected player across all teams and periods. Only a UI hint.
    pub(crate) selected_players: BTreeSet<PlayerId>,
}

impl SelectionStore {
    /// Empty store with no periods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single period of the given length, as a fresh editor starts.
    pub fn with_first_period(duration_minutes: u32) -> Self {
        let mut store = Self::new();
        store.add_period(duration_minutes);
        store
    }

    pub fn periods(&self) -> &[PeriodInfo] {
        &self.periods
    }

    pub fn period(&self, number: PeriodId) -> Option<&PeriodInfo> {
        self.periods.iter().find(|p| p.number == number)
    }

    pub fn selected_players(&self) -> &BTreeSet<PlayerId> {
        &self.selected_players
    }

    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.teams.keys().copied()
    }

    pub fn team_period(&self, team: TeamId, period: PeriodId) -> Option<&TeamPeriod> {
        self.teams.get(&team)?.get(&period)
    }

    /// All selections of a team/period, keyed by slot (empty if none).
    pub fn selections(&self, team: TeamId, period: PeriodId) -> impl Iterator<Item = (&Slot, &Selection)> {
        self.team_period(team, period)
            .into_iter()
            .flat_map(|tp| tp.selections.iter())
    }

    pub fn selection(&self, team: TeamId, period: PeriodId, slot: &Slot) -> Option<&Selection> {
        self.team_period(team, period)?.selections.get(slot)
    }

    /// Category a new selection in this team/period would get.
    pub fn performance_category(&self, team: TeamId, period: PeriodId) -> PerformanceCategory {
        self.team_period(team, period)
            .map(|tp| tp.performance_category)
            .unwrap_or_default()
    }

    pub fn captain(&self, team: TeamId, period: PeriodId) -> Option<PlayerId> {
        self.team_period(team, period)?.captain
    }

    /// True when the player is picked somewhere other than this slot (dim them in the picker).
    pub fn is_selected_elsewhere(&self, player: PlayerId, team: TeamId, period: PeriodId, slot: &Slot) -> bool {
        let here = self
            .selection(team, period, slot)
            .is_some_and(|s| s.player_id == player);
        self.selected_players.contains(&player) && !here
    }

    /// Every (team, period, slot, selection) held, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, PeriodId, &Slot, &Selection)> {
        self.teams.iter().flat_map(|(&team, periods)| {
            periods.iter().flat_map(move |(&period, tp)| {
                tp.selections
                    .iter()
                    .map(move |(slot, sel)| (team, period, slot, sel))
            })
        })
    }

    /// Append a period after the last one. Each team keeps the category it had in the previous last period.
    pub fn add_period(&mut self, duration_minutes: u32) -> PeriodId {
        let last = self.periods.last().map(|p| p.number);
        let number = last.map_or(1, |n| n + 1);
        self.periods.push(PeriodInfo {
            number,
            duration_minutes,
        });
        if let Some(last) = last {
            for periods in self.teams.values_mut() {
                if let Some(category) = periods.get(&last).map(|tp| tp.performance_category) {
                    periods.insert(
                        number,
                        TeamPeriod {
                            performance_category: category,
                            ..TeamPeriod::default()
                        },
                    );
                }
            }
        }
        number
    }

    /// Change a period's length. Returns false if the period does not exist.
    pub fn set_period_duration(&mut self, number: PeriodId, duration_minutes: u32) -> bool {
        match self.periods.iter_mut().find(|p| p.number == number) {
            Some(p) => {
                p.duration_minutes = duration_minutes;
                true
            }
            None => false,
        }
    }

    /// Make sure the period is listed, creating it with the given length if not.
    pub(crate) fn ensure_period(&mut self, number: PeriodId, duration_minutes: u32) {
        if let Err(idx) = self.periods.binary_search_by_key(&number, |p| p.number) {
            self.periods.insert(
                idx,
                PeriodInfo {
                    number,
                    duration_minutes,
                },
            );
        }
    }

    pub(crate) fn team_period_mut(&mut self, team: TeamId, period: PeriodId) -> &mut TeamPeriod {
        self.teams
            .entry(team)
            .or_default()
            .entry(period)
            .or_default()
    }
}

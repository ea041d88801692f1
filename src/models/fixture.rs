//! Fixture, fixture form input and its validation, match outcome.

use crate::models::formation::TeamFormat;
use crate::models::player::PlayerId;
use crate::models::selection::TeamId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Result of a match from our side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_scores(ours: u32, theirs: u32) -> Self {
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Score recorded for one of our teams in a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team_number: TeamId,
    pub score: u32,
}

/// A scheduled match against an opponent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub date: NaiveDate,
    pub opponent: String,
    pub location: Option<String>,
    pub team_name: Option<String>,
    pub format: TeamFormat,
    pub number_of_teams: u32,
    pub is_home: bool,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub motm_player_id: Option<PlayerId>,
}

impl Fixture {
    /// Per-team scores implied by the form's score fields: team 1 takes the home score and
    /// team 2 the away score, a missing one counting as 0. Empty when neither is entered.
    pub fn form_team_scores(&self) -> Vec<TeamScore> {
        if self.home_score.is_none() && self.away_score.is_none() {
            return Vec::new();
        }
        vec![
            TeamScore {
                team_number: 1,
                score: self.home_score.unwrap_or(0),
            },
            TeamScore {
                team_number: 2,
                score: self.away_score.unwrap_or(0),
            },
        ]
    }

    /// Our result, once both scores are in.
    pub fn outcome(&self) -> Option<Outcome> {
        let (home, away) = (self.home_score?, self.away_score?);
        let (ours, theirs) = if self.is_home { (home, away) } else { (away, home) };
        Some(Outcome::from_scores(ours, theirs))
    }
}

/// Fixture form input before validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FixtureDraft {
    /// Set when editing an existing fixture.
    #[serde(default)]
    pub id: Option<FixtureId>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub number_of_teams: Option<u32>,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    /// Only the first entry is kept as the fixture's MOTM.
    #[serde(default)]
    pub motm_player_ids: Vec<PlayerId>,
}

/// A required fixture field is missing or invalid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    MissingDate,
    MissingOpponent,
    UnknownFormat(String),
    NoTeams,
    /// A score was given for a team the fixture does not field.
    NoSuchTeam(TeamId),
    MissingTitle,
    MissingReviewDate,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingDate => write!(f, "A fixture date is required"),
            ValidationError::MissingOpponent => write!(f, "An opponent is required"),
            ValidationError::UnknownFormat(s) => write!(f, "Unknown team format: {}", s),
            ValidationError::NoTeams => write!(f, "Number of teams must be at least 1"),
            ValidationError::NoSuchTeam(n) => write!(f, "The fixture has no team {}", n),
            ValidationError::MissingTitle => write!(f, "An objective title is required"),
            ValidationError::MissingReviewDate => write!(f, "A review date is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FixtureDraft {
    /// Check required fields and build the fixture. A new id is assigned unless editing.
    pub fn validate(&self) -> Result<Fixture, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        let opponent = self.opponent.trim();
        if opponent.is_empty() {
            return Err(ValidationError::MissingOpponent);
        }
        let format: TeamFormat = self
            .format
            .parse()
            .map_err(|_| ValidationError::UnknownFormat(self.format.clone()))?;
        let number_of_teams = self.number_of_teams.unwrap_or(1);
        if number_of_teams == 0 {
            return Err(ValidationError::NoTeams);
        }
        Ok(Fixture {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            date,
            opponent: opponent.to_string(),
            location: non_blank(&self.location),
            team_name: non_blank(&self.team_name),
            format,
            number_of_teams,
            is_home: self.is_home,
            home_score: self.home_score,
            away_score: self.away_score,
            motm_player_id: self.motm_player_ids.first().copied(),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

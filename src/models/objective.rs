//! Coaching objectives set for a player.

use crate::models::fixture::ValidationError;
use crate::models::player::PlayerId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ObjectiveId = Uuid;

/// Points an objective is worth when the form leaves it blank.
pub const DEFAULT_OBJECTIVE_POINTS: u32 = 5;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveStatus {
    #[default]
    Ongoing,
    Improving,
    Complete,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerObjective {
    pub id: ObjectiveId,
    pub player_id: PlayerId,
    pub title: String,
    pub description: Option<String>,
    pub points: u32,
    pub status: ObjectiveStatus,
    pub review_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Objective form input before validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ObjectiveDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub review_date: Option<NaiveDate>,
}

impl ObjectiveDraft {
    /// Build a new ongoing objective for the player. Title and review date are required.
    pub fn validate(&self, player_id: PlayerId) -> Result<PlayerObjective, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let review_date = self.review_date.ok_or(ValidationError::MissingReviewDate)?;
        Ok(PlayerObjective {
            id: Uuid::new_v4(),
            player_id,
            title: title.to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            points: self.points.unwrap_or(DEFAULT_OBJECTIVE_POINTS),
            status: ObjectiveStatus::Ongoing,
            review_date,
            created_at: Utc::now(),
        })
    }
}

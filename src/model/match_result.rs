use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SideDto {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalDto {
    pub id: i32,
    pub match_id: i32,
    pub scorer: String,
    pub goal_time: String,
    pub team: SideDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchResultDto {
    pub id: i32,
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub goals: Vec<GoalDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalRequestDto {
    pub scorer: String,
    /// Free-form time of scoring, `MM:SS` or `HH:MM:SS`.
    pub goal_time: String,
    pub team: SideDto,
}

/// Body for recording a result. `home_score` and `away_score` must agree with the
/// number of goals tagged for each side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResultRequestDto {
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default)]
    pub goals: Vec<GoalRequestDto>,
}

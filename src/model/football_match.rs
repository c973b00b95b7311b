use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    /// `YYYY-MM-DD`
    pub match_date: String,
    /// `HH:MM`, 24-hour clock
    pub match_time: String,
    pub home_team: String,
    pub away_team: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchRequestDto {
    /// `YYYY-MM-DD`
    pub match_date: String,
    /// `HH:MM`, 24-hour clock
    pub match_time: String,
    pub home_team: String,
    pub away_team: String,
}

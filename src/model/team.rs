use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub logo: String,
    pub year_founded: i32,
    pub stadium_addr: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body for registering a team or replacing all of its fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamRequestDto {
    pub name: String,
    pub logo: String,
    pub year_founded: i32,
    pub stadium_addr: String,
    pub city: String,
}

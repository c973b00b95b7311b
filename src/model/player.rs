use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PositionDto {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    /// Height in centimetres.
    pub height: i32,
    /// Weight in kilograms.
    pub weight: i32,
    pub position: PositionDto,
    pub jersey_number: i32,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerRequestDto {
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub position: PositionDto,
    pub jersey_number: i32,
    pub team_name: String,
}

//! Player domain model and parameters.
//!
//! Players belong to a team by team name. The playing position is kept as the entity
//! enum so it can be written to the database without another conversion.

use chrono::{DateTime, Utc};
use entity::player::Position;

use crate::model::player::{PlayerDto, PlayerRequestDto, PositionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub position: Position,
    pub jersey_number: i32,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            weight: entity.weight,
            position: entity.position,
            jersey_number: entity.jersey_number,
            team_name: entity.team_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
            position: self.position.into(),
            jersey_number: self.jersey_number,
            team_name: self.team_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Mutable player fields, used for both registration and full-replace updates.
#[derive(Debug, Clone)]
pub struct PlayerParams {
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub position: Position,
    pub jersey_number: i32,
    pub team_name: String,
}

impl PlayerParams {
    pub fn from_dto(dto: PlayerRequestDto) -> Self {
        Self {
            name: dto.name,
            height: dto.height,
            weight: dto.weight,
            position: dto.position.into(),
            jersey_number: dto.jersey_number,
            team_name: dto.team_name,
        }
    }
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        match dto {
            PositionDto::Forward => Position::Forward,
            PositionDto::Midfielder => Position::Midfielder,
            PositionDto::Defender => Position::Defender,
            PositionDto::Goalkeeper => Position::Goalkeeper,
        }
    }
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        match position {
            Position::Forward => PositionDto::Forward,
            Position::Midfielder => PositionDto::Midfielder,
            Position::Defender => PositionDto::Defender,
            Position::Goalkeeper => PositionDto::Goalkeeper,
        }
    }
}

//! Team domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::team::{TeamDto, TeamRequestDto};

/// A football club, identified by its unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub logo: String,
    pub year_founded: i32,
    pub stadium_addr: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Team {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo: entity.logo,
            year_founded: entity.year_founded,
            stadium_addr: entity.stadium_addr,
            city: entity.city,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            logo: self.logo,
            year_founded: self.year_founded,
            stadium_addr: self.stadium_addr,
            city: self.city,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Mutable team fields, used for both registration and full-replace updates.
#[derive(Debug, Clone)]
pub struct TeamParams {
    pub name: String,
    pub logo: String,
    pub year_founded: i32,
    pub stadium_addr: String,
    pub city: String,
}

impl TeamParams {
    pub fn from_dto(dto: TeamRequestDto) -> Self {
        Self {
            name: dto.name,
            logo: dto.logo,
            year_founded: dto.year_founded,
            stadium_addr: dto.stadium_addr,
            city: dto.city,
        }
    }
}

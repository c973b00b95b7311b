//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::player::Position;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players attached to a team by name.
///
/// Jersey numbers default to a unique value so several default players can share a
/// team without colliding.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    height: i32,
    weight: i32,
    position: Position,
    jersey_number: i32,
    team_name: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"`
    /// - position: `Position::Midfielder`
    /// - jersey_number: `{id} % 1000`
    pub fn new(db: &'a DatabaseConnection, team_name: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Player {}", id),
            height: 178,
            weight: 72,
            position: Position::Midfielder,
            jersey_number: (id % 1000) as i32,
            team_name: team_name.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn jersey_number(mut self, jersey_number: i32) -> Self {
        self.jersey_number = jersey_number;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(self.height),
            weight: ActiveValue::Set(self.weight),
            position: ActiveValue::Set(self.position),
            jersey_number: ActiveValue::Set(self.jersey_number),
            team_name: ActiveValue::Set(self.team_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values on the given team.
pub async fn create_player(
    db: &DatabaseConnection,
    team_name: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_name).build().await
}

//! Player data repository.
//!
//! Player names and jersey numbers are only unique among active rows. Migrations back
//! both rules with partial unique indexes; the lookups here let the service report
//! which rule a request breaks.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{Player, PlayerParams};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player.
    pub async fn create(&self, params: PlayerParams) -> Result<Player, DbErr> {
        let now = Utc::now();

        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            height: ActiveValue::Set(params.height),
            weight: ActiveValue::Set(params.weight),
            position: ActiveValue::Set(params.position),
            jersey_number: ActiveValue::Set(params.jersey_number),
            team_name: ActiveValue::Set(params.team_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Finds an active player by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .filter(entity::player::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Checks whether an active player with the given name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .filter(entity::player::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an active player on `team_name` already wears `jersey_number`.
    ///
    /// # Arguments
    /// - `team_name` - Team whose active roster is searched
    /// - `jersey_number` - Number to look for
    /// - `excluding` - Player name to ignore, used when a player keeps their own number
    pub async fn jersey_taken(
        &self,
        team_name: &str,
        jersey_number: i32,
        excluding: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamName.eq(team_name))
            .filter(entity::player::Column::JerseyNumber.eq(jersey_number))
            .filter(entity::player::Column::DeletedAt.is_null());

        if let Some(name) = excluding {
            query = query.filter(entity::player::Column::Name.ne(name));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all active players in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::DeletedAt.is_null())
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets the active players of a team in insertion order.
    pub async fn get_by_team(&self, team_name: &str) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamName.eq(team_name))
            .filter(entity::player::Column::DeletedAt.is_null())
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Replaces every mutable field of the active player called `name`.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The updated player, looked up under its new name
    /// - `Ok(None)` - No active player with that name
    pub async fn update(&self, name: &str, params: PlayerParams) -> Result<Option<Player>, DbErr> {
        let new_name = params.name.clone();

        let result = entity::prelude::Player::update_many()
            .set(entity::player::ActiveModel {
                name: ActiveValue::Set(params.name),
                height: ActiveValue::Set(params.height),
                weight: ActiveValue::Set(params.weight),
                position: ActiveValue::Set(params.position),
                jersey_number: ActiveValue::Set(params.jersey_number),
                team_name: ActiveValue::Set(params.team_name),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::player::Column::Name.eq(name))
            .filter(entity::player::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_name(&new_name).await
    }

    /// Soft deletes the active player called `name`.
    pub async fn soft_delete(&self, name: &str) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Player::update_many()
            .set(entity::player::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::player::Column::Name.eq(name))
            .filter(entity::player::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `deleted_at` on the most recently deleted player called `name`.
    ///
    /// Several deleted rows may share a name; only the latest one comes back. Fails with
    /// a unique violation if an active player already uses the name or the jersey number
    /// has since been taken on the team.
    pub async fn restore(&self, name: &str) -> Result<bool, DbErr> {
        let Some(deleted) = entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .filter(entity::player::Column::DeletedAt.is_not_null())
            .order_by_desc(entity::player::Column::DeletedAt)
            .order_by_desc(entity::player::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let result = entity::prelude::Player::update_many()
            .set(entity::player::ActiveModel {
                deleted_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::player::Column::Id.eq(deleted.id))
            .filter(entity::player::Column::DeletedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

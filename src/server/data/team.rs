//! Team data repository.
//!
//! Teams are addressed by name. The `teams.name` unique constraint is the only guard
//! against duplicates, so registering or renaming onto a taken name fails with a unique
//! violation from the store.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::team::{Team, TeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The stored team with its assigned id and timestamps
    /// - `Err(DbErr)` - Insert failed, including unique violations on `name`
    pub async fn create(&self, params: TeamParams) -> Result<Team, DbErr> {
        let now = Utc::now();

        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            logo: ActiveValue::Set(params.logo),
            year_founded: ActiveValue::Set(params.year_founded),
            stadium_addr: ActiveValue::Set(params.stadium_addr),
            city: ActiveValue::Set(params.city),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Finds an active team by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Checks whether an active team with the given name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all active teams in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::DeletedAt.is_null())
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Replaces every mutable field of the active team called `name`.
    ///
    /// The name itself may change; the team is looked up again under the new name.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The updated team
    /// - `Ok(None)` - No active team with that name
    /// - `Err(DbErr)` - Update failed, including unique violations when renaming
    pub async fn update(&self, name: &str, params: TeamParams) -> Result<Option<Team>, DbErr> {
        let new_name = params.name.clone();

        let result = entity::prelude::Team::update_many()
            .set(entity::team::ActiveModel {
                name: ActiveValue::Set(params.name),
                logo: ActiveValue::Set(params.logo),
                year_founded: ActiveValue::Set(params.year_founded),
                stadium_addr: ActiveValue::Set(params.stadium_addr),
                city: ActiveValue::Set(params.city),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_name(&new_name).await
    }

    /// Soft deletes the active team called `name`.
    ///
    /// # Returns
    /// - `Ok(true)` - Team marked as deleted
    /// - `Ok(false)` - No active team with that name
    pub async fn soft_delete(&self, name: &str) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Team::update_many()
            .set(entity::team::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `deleted_at` on the deleted team called `name`.
    ///
    /// # Returns
    /// - `Ok(true)` - Team restored
    /// - `Ok(false)` - No deleted team with that name
    pub async fn restore(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::update_many()
            .set(entity::team::ActiveModel {
                deleted_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::team::Column::Name.eq(name))
            .filter(entity::team::Column::DeletedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

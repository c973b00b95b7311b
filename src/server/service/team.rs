use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{Team, TeamParams},
};

const TEAM_EXISTS: &str = "team already exists";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new team
    ///
    /// Duplicate names are caught by the unique constraint on insert rather than a
    /// separate lookup.
    pub async fn register(&self, params: TeamParams) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TEAM_EXISTS))?;

        tracing::info!("Registered team {}", team.name);

        Ok(team)
    }

    /// Replaces every field of the active team called `name`
    pub async fn update(&self, name: &str, params: TeamParams) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db)
            .update(name, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TEAM_EXISTS))?
            .ok_or_else(|| AppError::NotFound("team not found".to_string()))?;

        Ok(team)
    }

    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).soft_delete(name).await? {
            return Err(AppError::NotFound("team not found".to_string()));
        }

        Ok(())
    }

    pub async fn restore(&self, name: &str) -> Result<(), AppError> {
        let restored = TeamRepository::new(self.db)
            .restore(name)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TEAM_EXISTS))?;

        if !restored {
            return Err(AppError::NotFound(
                "team not found or not deleted".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("team not found".to_string()))
    }
}

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::player::{Player, PlayerParams},
};

const JERSEY_TAKEN: &str = "jersey number already taken in this team";
const PLAYER_EXISTS: &str = "player already exists";

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a player on an active team
    ///
    /// Checks, in order, that the team is active, that the jersey number is free on the
    /// team's roster and that no active player has the same name.
    pub async fn register(&self, params: PlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if !TeamRepository::new(self.db).exists(&params.team_name).await? {
            return Err(AppError::NotFound("team not found".to_string()));
        }

        if repo
            .jersey_taken(&params.team_name, params.jersey_number, None)
            .await?
        {
            return Err(AppError::Conflict(JERSEY_TAKEN.to_string()));
        }

        if repo.exists(&params.name).await? {
            return Err(AppError::Conflict(PLAYER_EXISTS.to_string()));
        }

        let player = repo.create(params).await.map_err(player_conflict)?;

        tracing::info!("Registered player {} for {}", player.name, player.team_name);

        Ok(player)
    }

    /// Replaces every field of the active player called `name`
    ///
    /// The player may keep their own jersey number; only another active player on the
    /// target team wearing it is a clash.
    pub async fn update(&self, name: &str, params: PlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if !TeamRepository::new(self.db).exists(&params.team_name).await? {
            return Err(AppError::NotFound("team not found".to_string()));
        }

        if repo
            .jersey_taken(&params.team_name, params.jersey_number, Some(name))
            .await?
        {
            return Err(AppError::Conflict(JERSEY_TAKEN.to_string()));
        }

        repo.update(name, params)
            .await
            .map_err(player_conflict)?
            .ok_or_else(|| AppError::NotFound("player not found".to_string()))
    }

    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        if !PlayerRepository::new(self.db).soft_delete(name).await? {
            return Err(AppError::NotFound("player not found".to_string()));
        }

        Ok(())
    }

    pub async fn restore(&self, name: &str) -> Result<(), AppError> {
        let restored = PlayerRepository::new(self.db)
            .restore(name)
            .await
            .map_err(player_conflict)?;

        if !restored {
            return Err(AppError::NotFound(
                "player not found or not deleted".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_all().await?)
    }

    pub async fn list_by_team(&self, team_name: &str) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_by_team(team_name).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("player not found".to_string()))
    }
}

/// Maps a unique violation on the players table to the rule it broke.
///
/// The violated index is identified from the driver message, which names either the
/// jersey index or its columns.
fn player_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("jersey") => {
            AppError::Conflict(JERSEY_TAKEN.to_string())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(PLAYER_EXISTS.to_string()),
        _ => AppError::DbErr(err),
    }
}

//! Match result service.
//!
//! Validates a submitted result against the stored match and its own goal list before
//! handing the write to [`MatchResultRepository`], which runs it in a transaction.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{football_match::MatchRepository, match_result::MatchResultRepository},
    error::AppError,
    model::match_result::{MatchResult, MatchResultParams},
};

const RESULT_EXISTS: &str = "result already exists for this match";

pub struct MatchResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the result of an active match
    ///
    /// # Returns
    /// - `Ok(MatchResult)` - Stored result with its goals
    /// - `Err(AppError::NotFound)` - Match missing or deleted
    /// - `Err(AppError::Conflict)` - Match already has an active result
    /// - `Err(AppError::BadRequest)` - Scores disagree with the goal list
    pub async fn register(&self, params: MatchResultParams) -> Result<MatchResult, AppError> {
        let repo = MatchResultRepository::new(self.db);

        if !MatchRepository::new(self.db).exists(params.match_id).await? {
            return Err(AppError::NotFound("match not found".to_string()));
        }

        if repo.exists_for_match(params.match_id).await? {
            return Err(AppError::Conflict(RESULT_EXISTS.to_string()));
        }

        check_goal_tally(&params)?;

        let result = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, RESULT_EXISTS))?;

        tracing::info!(
            "Recorded result {}-{} for match {}",
            result.home_score,
            result.away_score,
            result.match_id
        );

        Ok(result)
    }

    /// Replaces the scores and goals of an active result
    ///
    /// The result stays attached to its stored match whatever `params.match_id` says.
    pub async fn update(&self, id: i32, params: MatchResultParams) -> Result<MatchResult, AppError> {
        let repo = MatchResultRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("match result not found".to_string()));
        }

        check_goal_tally(&params)?;

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("match result not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MatchResultRepository::new(self.db).soft_delete(id).await? {
            return Err(AppError::NotFound("match result not found".to_string()));
        }

        Ok(())
    }

    pub async fn restore(&self, id: i32) -> Result<(), AppError> {
        let restored = MatchResultRepository::new(self.db)
            .restore(id)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, RESULT_EXISTS))?;

        if !restored {
            return Err(AppError::NotFound(
                "match result not found or not deleted".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<MatchResult>, AppError> {
        Ok(MatchResultRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MatchResult, AppError> {
        MatchResultRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("match result not found".to_string()))
    }

    pub async fn get_by_match_id(&self, match_id: i32) -> Result<MatchResult, AppError> {
        MatchResultRepository::new(self.db)
            .find_by_match_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound("match result not found".to_string()))
    }
}

/// Rejects scores that disagree with the number of goals credited to each side.
fn check_goal_tally(params: &MatchResultParams) -> Result<(), AppError> {
    let tally = params.tally();

    if params.home_score != tally.home {
        return Err(AppError::BadRequest(
            "home score does not match number of home goals".to_string(),
        ));
    }

    if params.away_score != tally.away {
        return Err(AppError::BadRequest(
            "away score does not match number of away goals".to_string(),
        ));
    }

    Ok(())
}

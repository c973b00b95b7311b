//! Match result and goal domain models.
//!
//! A result owns the goals recorded against its match. The scores a client submits must
//! agree with the goal list; [`GoalTally`] derives the per-side counts used for that check.

use chrono::{DateTime, Utc};
use entity::goal::Side;

use crate::model::match_result::{
    GoalDto, GoalRequestDto, MatchResultDto, MatchResultRequestDto, SideDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub match_id: i32,
    pub scorer: String,
    pub goal_time: String,
    pub team: Side,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn from_entity(entity: entity::goal::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            scorer: entity.scorer,
            goal_time: entity.goal_time,
            team: entity.team,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GoalDto {
        GoalDto {
            id: self.id,
            match_id: self.match_id,
            scorer: self.scorer,
            goal_time: self.goal_time,
            team: self.team.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A match result hydrated with its active goals, ordered by goal time.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub id: i32,
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub goals: Vec<Goal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MatchResult {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The match result row
    /// - `goals` - Goal rows for the result's match, already filtered and ordered
    pub fn from_entity(entity: entity::match_result::Model, goals: Vec<entity::goal::Model>) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            home_score: entity.home_score,
            away_score: entity.away_score,
            goals: goals.into_iter().map(Goal::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> MatchResultDto {
        MatchResultDto {
            id: self.id,
            match_id: self.match_id,
            home_score: self.home_score,
            away_score: self.away_score,
            goals: self.goals.into_iter().map(Goal::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoalParams {
    pub scorer: String,
    pub goal_time: String,
    pub team: Side,
}

impl From<GoalRequestDto> for GoalParams {
    fn from(dto: GoalRequestDto) -> Self {
        Self {
            scorer: dto.scorer,
            goal_time: dto.goal_time,
            team: dto.team.into(),
        }
    }
}

/// Fields for registering a result or replacing one.
///
/// On update `match_id` is ignored; the stored result keeps its match.
#[derive(Debug, Clone)]
pub struct MatchResultParams {
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub goals: Vec<GoalParams>,
}

impl MatchResultParams {
    pub fn from_dto(dto: MatchResultRequestDto) -> Self {
        Self {
            match_id: dto.match_id,
            home_score: dto.home_score,
            away_score: dto.away_score,
            goals: dto.goals.into_iter().map(GoalParams::from).collect(),
        }
    }

    /// Counts the submitted goals per side.
    pub fn tally(&self) -> GoalTally {
        GoalTally::from_goals(&self.goals)
    }
}

/// Number of goals credited to each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalTally {
    pub home: i32,
    pub away: i32,
}

impl GoalTally {
    pub fn from_goals(goals: &[GoalParams]) -> Self {
        goals.iter().fold(Self::default(), |mut tally, goal| {
            match goal.team {
                Side::Home => tally.home += 1,
                Side::Away => tally.away += 1,
            }
            tally
        })
    }
}

impl From<SideDto> for Side {
    fn from(dto: SideDto) -> Self {
        match dto {
            SideDto::Home => Side::Home,
            SideDto::Away => Side::Away,
        }
    }
}

impl From<Side> for SideDto {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => SideDto::Home,
            Side::Away => SideDto::Away,
        }
    }
}

use crate::server::{
    data::match_result::MatchResultRepository,
    model::match_result::{GoalParams, MatchResultParams},
};
use entity::goal::Side;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, SqlErr,
};
use test_utils::{builder::TestBuilder, factory};

mod get_all;

fn goal(scorer: &str, goal_time: &str, team: Side) -> GoalParams {
    GoalParams {
        scorer: scorer.to_string(),
        goal_time: goal_time.to_string(),
        team,
    }
}

fn result_params(match_id: i32, goals: Vec<GoalParams>) -> MatchResultParams {
    let home = goals.iter().filter(|g| g.team == Side::Home).count() as i32;
    let away = goals.len() as i32 - home;
    MatchResultParams {
        match_id,
        home_score: home,
        away_score: away,
        goals,
    }
}

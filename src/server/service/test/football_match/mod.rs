use crate::server::{
    error::AppError, model::football_match::MatchParams, service::football_match::MatchService,
};
use test_utils::{builder::TestBuilder, factory};

mod register;
mod update;

fn match_params(home: &str, away: &str, date: &str, time: &str) -> MatchParams {
    MatchParams {
        match_date: date.to_string(),
        match_time: time.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
    }
}

use crate::server::{error::AppError, model::team::TeamParams, service::team::TeamService};
use test_utils::{builder::TestBuilder, factory};

mod restore;
mod update;

fn team_params(name: &str) -> TeamParams {
    TeamParams {
        name: name.to_string(),
        logo: "logo.png".to_string(),
        year_founded: 1933,
        stadium_addr: "Gelora Bung Karno".to_string(),
        city: "Jakarta".to_string(),
    }
}

pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_team_table;
mod m20260105_000003_create_player_table;
mod m20260106_000004_create_match_table;
mod m20260106_000005_create_match_result_table;
mod m20260106_000006_create_goal_table;
mod m20260107_000007_create_active_unique_indexes;

pub use m20260107_000007_create_active_unique_indexes::{ActiveUniqueIndex, ACTIVE_UNIQUE_INDEXES};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_team_table::Migration),
            Box::new(m20260105_000003_create_player_table::Migration),
            Box::new(m20260106_000004_create_match_table::Migration),
            Box::new(m20260106_000005_create_match_result_table::Migration),
            Box::new(m20260106_000006_create_goal_table::Migration),
            Box::new(m20260107_000007_create_active_unique_indexes::Migration),
        ]
    }
}

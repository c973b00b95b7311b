//! Partial unique indexes enforcing "unique among active rows".
//!
//! The query builder has no portable partial-index support, so the statements are
//! issued as raw SQL. The syntax is shared by SQLite and PostgreSQL.

use sea_orm_migration::prelude::*;

/// A unique index restricted to rows whose `deleted_at` is unset.
pub struct ActiveUniqueIndex {
    pub name: &'static str,
    /// Table the index is created on.
    pub table: &'static str,
    pub create_sql: &'static str,
}

pub const ACTIVE_UNIQUE_INDEXES: &[ActiveUniqueIndex] = &[
    ActiveUniqueIndex {
        name: "uidx_players_active_name",
        table: "players",
        create_sql: "CREATE UNIQUE INDEX IF NOT EXISTS uidx_players_active_name \
                     ON players (name) WHERE deleted_at IS NULL",
    },
    ActiveUniqueIndex {
        name: "uidx_players_active_jersey",
        table: "players",
        create_sql: "CREATE UNIQUE INDEX IF NOT EXISTS uidx_players_active_jersey \
                     ON players (team_name, jersey_number) WHERE deleted_at IS NULL",
    },
    ActiveUniqueIndex {
        name: "uidx_match_results_active_match",
        table: "match_results",
        create_sql: "CREATE UNIQUE INDEX IF NOT EXISTS uidx_match_results_active_match \
                     ON match_results (match_id) WHERE deleted_at IS NULL",
    },
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for index in ACTIVE_UNIQUE_INDEXES {
            db.execute_unprepared(index.create_sql).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for index in ACTIVE_UNIQUE_INDEXES {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {}", index.name))
                .await?;
        }

        Ok(())
    }
}

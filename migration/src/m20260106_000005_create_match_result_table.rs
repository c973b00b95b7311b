use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_match_table::Match;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchResult::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchResult::Id))
                    .col(integer(MatchResult::MatchId))
                    .col(integer(MatchResult::HomeScore))
                    .col(integer(MatchResult::AwayScore))
                    .col(timestamp_with_time_zone(MatchResult::CreatedAt))
                    .col(timestamp_with_time_zone(MatchResult::UpdatedAt))
                    .col(timestamp_with_time_zone_null(MatchResult::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_result_match_id")
                            .from(MatchResult::Table, MatchResult::MatchId)
                            .to(Match::Table, Match::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchResult {
    #[sea_orm(iden = "match_results")]
    Table,
    Id,
    MatchId,
    HomeScore,
    AwayScore,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_match_table::Match,
    m20260106_000005_create_match_result_table::MatchResult,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::MatchResultId))
                    .col(string(Goal::Scorer))
                    .col(string(Goal::GoalTime))
                    .col(string_len(Goal::Team, 8))
                    .col(timestamp_with_time_zone(Goal::CreatedAt))
                    .col(timestamp_with_time_zone(Goal::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Goal::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_match_id")
                            .from(Goal::Table, Goal::MatchId)
                            .to(Match::Table, Match::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_match_result_id")
                            .from(Goal::Table, Goal::MatchResultId)
                            .to(MatchResult::Table, MatchResult::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_goals_match_id")
                    .table(Goal::Table)
                    .col(Goal::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_goals_match_result_id")
                    .table(Goal::Table)
                    .col(Goal::MatchResultId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    #[sea_orm(iden = "goals")]
    Table,
    Id,
    MatchId,
    MatchResultId,
    Scorer,
    GoalTime,
    Team,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

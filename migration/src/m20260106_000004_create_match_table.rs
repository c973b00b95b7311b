use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(pk_auto(Match::Id))
                    .col(date(Match::MatchDate))
                    .col(time(Match::MatchTime))
                    .col(string(Match::HomeTeam))
                    .col(string(Match::AwayTeam))
                    .col(timestamp_with_time_zone(Match::CreatedAt))
                    .col(timestamp_with_time_zone(Match::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Match::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_schedule")
                    .table(Match::Table)
                    .col(Match::MatchDate)
                    .col(Match::MatchTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    MatchDate,
    MatchTime,
    HomeTeam,
    AwayTeam,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(integer(Player::Height))
                    .col(integer(Player::Weight))
                    .col(string_len(Player::Position, 16))
                    .col(integer(Player::JerseyNumber))
                    .col(string(Player::TeamName))
                    .col(timestamp_with_time_zone(Player::CreatedAt))
                    .col(timestamp_with_time_zone(Player::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Player::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_team_name")
                    .table(Player::Table)
                    .col(Player::TeamName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    Name,
    Height,
    Weight,
    Position,
    JerseyNumber,
    TeamName,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

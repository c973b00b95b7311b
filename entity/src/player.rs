use sea_orm::entity::prelude::*;

/// Playing position stored as a lowercase string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Position {
    #[sea_orm(string_value = "forward")]
    Forward,
    #[sea_orm(string_value = "midfielder")]
    Midfielder,
    #[sea_orm(string_value = "defender")]
    Defender,
    #[sea_orm(string_value = "goalkeeper")]
    Goalkeeper,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub position: Position,
    pub jersey_number: i32,
    pub team_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

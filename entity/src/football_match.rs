use sea_orm::entity::prelude::*;

/// A scheduled fixture between two teams, referenced by team name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_date: Date,
    pub match_time: Time,
    pub home_team: String,
    pub away_team: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_result::Entity")]
    MatchResult,
}

impl Related<super::match_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

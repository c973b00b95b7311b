use sea_orm::entity::prelude::*;

/// Which side of the fixture a goal counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Side {
    #[sea_orm(string_value = "home")]
    Home,
    #[sea_orm(string_value = "away")]
    Away,
}

/// A single goal, owned by the result it was submitted with. `match_id` is kept
/// alongside so a result update can clear every goal recorded for the match.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub match_result_id: i32,
    pub scorer: String,
    pub goal_time: String,
    pub team: Side,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::football_match::Entity",
        from = "Column::MatchId",
        to = "super::football_match::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Match,
    #[sea_orm(
        belongs_to = "super::match_result::Entity",
        from = "Column::MatchResultId",
        to = "super::match_result::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    MatchResult,
}

impl Related<super::football_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::match_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use super::*;

/// Tests listing teams.
///
/// Verifies that deleted teams are excluded and the rest come back in
/// insertion order.
///
/// Expected: Ok with two active teams ordered by id
#[tokio::test]
async fn lists_active_teams_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let deleted = factory::create_team(db).await?;
    let third = factory::create_team(db).await?;
    factory::helpers::soft_delete_team(db, deleted).await?;

    let teams = TeamRepository::new(db).get_all().await?;

    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec![first.name.as_str(), third.name.as_str()]);

    Ok(())
}

/// Tests listing teams on an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teams = TeamRepository::new(db).get_all().await?;

    assert!(teams.is_empty());

    Ok(())
}

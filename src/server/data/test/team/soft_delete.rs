use super::*;

/// Tests soft deleting an active team.
///
/// Verifies that the row stays in the table with `deleted_at` set and that the
/// team disappears from active lookups.
///
/// Expected: Ok(true)
#[tokio::test]
async fn marks_team_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.soft_delete(&team.name).await?;

    assert!(deleted);
    assert!(!repo.exists(&team.name).await?);

    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests deleting a team twice.
///
/// Expected: second call returns Ok(false)
#[tokio::test]
async fn returns_false_when_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.soft_delete(&team.name).await?);
    assert!(!repo.soft_delete(&team.name).await?);

    Ok(())
}

use super::*;

/// Tests restoring a soft-deleted team.
///
/// Expected: Ok(true) and team visible again
#[tokio::test]
async fn restores_deleted_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let name = team.name.clone();
    factory::helpers::soft_delete_team(db, team).await?;

    let repo = TeamRepository::new(db);
    let restored = repo.restore(&name).await?;

    assert!(restored);
    let found = repo.find_by_name(&name).await?.unwrap();
    assert!(found.deleted_at.is_none());

    Ok(())
}

/// Tests restoring a team that was never deleted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_active_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    assert!(!repo.restore(&team.name).await?);

    Ok(())
}

use super::*;

/// Tests restoring a deleted player.
///
/// Expected: Ok(true) and player findable again
#[tokio::test]
async fn restores_deleted_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_player(db, &team.name).await?;

    let repo = PlayerRepository::new(db);
    repo.soft_delete(&player.name).await?;
    assert!(repo.find_by_name(&player.name).await?.is_none());

    assert!(repo.restore(&player.name).await?);
    assert!(repo.find_by_name(&player.name).await?.is_some());

    Ok(())
}

/// Tests restoring an active player.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_active_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_player(db, &team.name).await?;

    assert!(!PlayerRepository::new(db).restore(&player.name).await?);

    Ok(())
}

use super::*;

/// Tests moving a player to another team under a new name.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_team(db).await?;
    let to = factory::create_team(db).await?;
    let player = factory::create_player(db, &from.name).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update(&player.name, player_params("Renamed", &to.name, 99))
        .await?
        .unwrap();

    assert_eq!(updated.id, player.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.team_name, to.name);
    assert_eq!(updated.jersey_number, 99);
    assert_eq!(updated.position, Position::Forward);

    Ok(())
}

/// Tests updating a deleted player.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_player() -> Result<(), DbErr> {
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

    let result = repo
        .update(&player.name, player_params(&player.name, &team.name, 5))
        .await?;

    assert!(result.is_none());

    Ok(())
}

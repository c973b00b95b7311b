use super::*;

/// Tests registering a player on an active team.
///
/// Expected: Ok with stored player
#[tokio::test]
async fn registers_player() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let service = PlayerService::new(db);
    let player = service
        .register(player_params("Evan Dimas", &team.name, 6))
        .await?;

    assert_eq!(service.get_by_name("Evan Dimas").await?, player);

    Ok(())
}

/// Tests registering a player for a deleted team.
///
/// Expected: Err(AppError::NotFound("team not found"))
#[tokio::test]
async fn fails_when_team_deleted() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let name = team.name.clone();
    factory::helpers::soft_delete_team(db, team).await?;

    let result = PlayerService::new(db)
        .register(player_params("Evan Dimas", &name, 6))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "team not found"));

    Ok(())
}

/// Tests registering a player with a number a teammate already wears.
///
/// The name is also taken, but the jersey check runs first.
///
/// Expected: Err(AppError::Conflict("jersey number already taken in this team"))
#[tokio::test]
async fn rejects_taken_jersey_before_duplicate_name() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let existing = factory::player::PlayerFactory::new(db, &team.name)
        .jersey_number(9)
        .build()
        .await?;

    let result = PlayerService::new(db)
        .register(player_params(&existing.name, &team.name, 9))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ref msg)) if msg == "jersey number already taken in this team"
    ));

    Ok(())
}

/// Tests registering a second active player with the same name.
///
/// Expected: Err(AppError::Conflict("player already exists"))
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    let existing = factory::create_player(db, &team.name).await?;

    let result = PlayerService::new(db)
        .register(player_params(&existing.name, &other.name, 77))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(ref msg)) if msg == "player already exists"));

    Ok(())
}

/// Tests that a deleted player frees their name and number.
///
/// Expected: Ok
#[tokio::test]
async fn allows_reuse_after_delete() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = PlayerService::new(db);
    service
        .register(player_params("Ilija Spasojevic", &team.name, 9))
        .await?;
    service.delete("Ilija Spasojevic").await?;

    let result = service
        .register(player_params("Ilija Spasojevic", &team.name, 9))
        .await;

    assert!(result.is_ok());

    Ok(())
}

use super::*;

/// Tests restoring a player whose name was given to a new player meanwhile.
///
/// Expected: Err(AppError::Conflict) naming the duplicate player
#[tokio::test]
async fn rejects_restore_into_taken_name() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = PlayerService::new(db);

    service
        .register(player_params("Ace", &team.name, 9))
        .await?;
    service.delete("Ace").await?;
    service
        .register(player_params("Ace", &team.name, 10))
        .await?;

    let result = service.restore("Ace").await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ref msg)) if msg == "player already exists"
    ));

    Ok(())
}

/// Tests restoring a player whose jersey number was reassigned on the team.
///
/// Expected: Err(AppError::Conflict) naming the jersey clash, player still deleted
#[tokio::test]
async fn rejects_restore_into_taken_jersey() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = PlayerService::new(db);

    service
        .register(player_params("Veteran", &team.name, 9))
        .await?;
    service.delete("Veteran").await?;
    service
        .register(player_params("Rookie", &team.name, 9))
        .await?;

    let result = service.restore("Veteran").await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ref msg)) if msg == "jersey number already taken in this team"
    ));
    assert!(matches!(
        service.get_by_name("Veteran").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the restore cycle when nothing has taken the player's place.
///
/// Expected: Ok, then NotFound on a second restore
#[tokio::test]
async fn restores_deleted_player_once() -> Result<(), AppError> {
    let test = build().await;
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = PlayerService::new(db);

    service
        .register(player_params("Ace", &team.name, 9))
        .await?;
    service.delete("Ace").await?;

    service.restore("Ace").await?;
    assert_eq!(service.get_by_name("Ace").await?.jersey_number, 9);

    assert!(matches!(
        service.restore("Ace").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

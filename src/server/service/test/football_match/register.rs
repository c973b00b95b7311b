use super::*;

/// Tests scheduling a match between two active teams.
///
/// Expected: Ok with positive id, rendered as 2025-06-01 18:00
#[tokio::test]
async fn schedules_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;

    let service = MatchService::new(db);
    let fixture = service
        .register(match_params(&home.name, &away.name, "2025-06-01", "18:00"))
        .await?;

    assert!(fixture.id > 0);
    let dto = service.get_by_id(fixture.id).await?.into_dto();
    assert_eq!(dto.match_date, "2025-06-01");
    assert_eq!(dto.match_time, "18:00");

    Ok(())
}

/// Tests the order in which match checks fail.
///
/// Each request is invalid in several ways; the earliest check decides.
///
/// Expected: home team, away team, same team, then time format errors
#[tokio::test]
async fn reports_first_failing_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = MatchService::new(db);

    let result = service
        .register(match_params("Missing", "Missing", "bad", "bad"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "home team not found"));

    let result = service
        .register(match_params(&team.name, "Missing", "bad", "bad"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "away team not found"));

    let result = service
        .register(match_params(&team.name, &team.name, "bad", "bad"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "home team and away team cannot be the same"
    ));

    let other = factory::create_team(db).await?;
    let result = service
        .register(match_params(&team.name, &other.name, "2025-06-01", "25:00"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "invalid time format. Use HH:MM"
    ));

    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests scheduling against a deleted away team.
///
/// Expected: Err(AppError::NotFound("away team not found"))
#[tokio::test]
async fn fails_when_away_team_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;
    let away_name = away.name.clone();
    factory::helpers::soft_delete_team(db, away).await?;

    let result = MatchService::new(db)
        .register(match_params(&home.name, &away_name, "2025-06-01", "18:00"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "away team not found"));

    Ok(())
}

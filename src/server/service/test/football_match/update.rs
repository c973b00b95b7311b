use super::*;

/// Tests updating a match that does not exist.
///
/// Expected: Err(AppError::NotFound("match not found"))
#[tokio::test]
async fn fails_for_unknown_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;

    let result = MatchService::new(db)
        .update(
            9999,
            match_params(&home.name, &away.name, "2025-06-01", "18:00"),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "match not found"));

    Ok(())
}

/// Tests moving a match to a new kick-off.
///
/// Expected: Ok with new date and time
#[tokio::test]
async fn reschedules_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, fixture) = factory::helpers::create_match_with_teams(db).await?;

    let updated = MatchService::new(db)
        .update(
            fixture.id,
            match_params(&home.name, &away.name, "2025-08-17", "07:30"),
        )
        .await?
        .into_dto();

    assert_eq!(updated.match_date, "2025-08-17");
    assert_eq!(updated.match_time, "07:30");

    Ok(())
}

/// Tests the delete/restore cycle through the service.
///
/// Expected: NotFound with the restore message when restoring an active match
#[tokio::test]
async fn restore_requires_deleted_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, fixture) = factory::helpers::create_match_with_teams(db).await?;
    let service = MatchService::new(db);

    let result = service.restore(fixture.id).await;
    assert!(matches!(
        result,
        Err(AppError::NotFound(ref msg)) if msg == "match not found or not deleted"
    ));

    service.delete(fixture.id).await?;
    assert!(matches!(
        service.get_by_id(fixture.id).await,
        Err(AppError::NotFound(_))
    ));
    service.restore(fixture.id).await?;
    assert!(service.get_by_id(fixture.id).await.is_ok());

    Ok(())
}

use super::*;

/// Tests that delete succeeds only on an active team and restore only on a
/// deleted one.
///
/// Expected: NotFound for each call made in the wrong state
#[tokio::test]
async fn delete_and_restore_require_matching_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let service = TeamService::new(db);

    let result = service.restore(&team.name).await;
    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "team not found or not deleted")
    );

    service.delete(&team.name).await?;
    assert!(service.list().await?.is_empty());

    let result = service.delete(&team.name).await;
    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "team not found"));

    service.restore(&team.name).await?;
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

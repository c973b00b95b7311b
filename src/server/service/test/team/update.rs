use super::*;

/// Tests updating a team that does not exist.
///
/// Expected: Err(AppError::NotFound("team not found"))
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .update("Ghost", team_params("Ghost"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "team not found"));

    Ok(())
}

/// Tests renaming a team onto a taken name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_onto_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;

    let result = TeamService::new(db)
        .update(&second.name, team_params(&first.name))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

use super::*;

/// Tests replacing all fields of a team, including its name.
///
/// Expected: Ok(Some) with the renamed team
#[tokio::test]
async fn updates_all_fields_and_renames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::team::TeamFactory::new(db)
        .name("Old Name")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let mut params = team_params("New Name");
    params.city = "Bandung".to_string();
    let updated = repo.update("Old Name", params).await?.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "Bandung");
    assert!(updated.updated_at >= created.updated_at);
    assert!(repo.find_by_name("Old Name").await?.is_none());

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo.update("Nobody", team_params("Nobody")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests updating a soft-deleted team.
///
/// Verifies that deleted teams are not matched by update.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_team() -> Result<(), DbErr> {
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
    let result = repo.update(&name, team_params(&name)).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests renaming a team onto a name another team already holds.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_rename_onto_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let err = repo
        .update(&second.name, team_params(&first.name))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

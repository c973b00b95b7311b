use super::*;

/// Tests detecting a jersey number worn by an active teammate.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_number_on_same_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    factory::player::PlayerFactory::new(db, &team.name)
        .jersey_number(10)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.jersey_taken(&team.name, 10, None).await?);
    assert!(!repo.jersey_taken(&team.name, 11, None).await?);

    Ok(())
}

/// Tests that the same number on another team does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    factory::player::PlayerFactory::new(db, &other.name)
        .jersey_number(7)
        .build()
        .await?;

    let taken = PlayerRepository::new(db)
        .jersey_taken(&team.name, 7, None)
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests that a player keeping their own number is not a clash, and that
/// deleted players free their number.
///
/// Expected: Ok(false) in both cases
#[tokio::test]
async fn ignores_excluded_and_deleted_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let keeper = factory::player::PlayerFactory::new(db, &team.name)
        .jersey_number(1)
        .build()
        .await?;
    let retired = factory::player::PlayerFactory::new(db, &team.name)
        .jersey_number(14)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    repo.soft_delete(&retired.name).await?;

    assert!(!repo.jersey_taken(&team.name, 1, Some(&keeper.name)).await?);
    assert!(!repo.jersey_taken(&team.name, 14, None).await?);

    Ok(())
}

use super::*;

/// Tests that matches are listed by date, then time.
///
/// Expected: Ok with matches in kick-off order regardless of insertion order
#[tokio::test]
async fn orders_by_date_then_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;

    let repo = MatchRepository::new(db);
    let late = repo
        .create(schedule(&home.name, &away.name, (2025, 6, 2), (15, 0)))
        .await?;
    let evening = repo
        .create(schedule(&home.name, &away.name, (2025, 6, 1), (19, 30)))
        .await?;
    let afternoon = repo
        .create(schedule(&home.name, &away.name, (2025, 6, 1), (15, 30)))
        .await?;

    let ids: Vec<_> = repo.get_all().await?.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![afternoon.id, evening.id, late.id]);

    Ok(())
}

/// Tests that deleted matches are not listed.
///
/// Expected: Ok with only the active match
#[tokio::test]
async fn excludes_deleted_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, deleted) = factory::helpers::create_match_with_teams(db).await?;
    let active = factory::create_match(db, &away.name, &home.name).await?;
    factory::helpers::soft_delete_match(db, deleted).await?;

    let matches = MatchRepository::new(db).get_all().await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, active.id);

    Ok(())
}

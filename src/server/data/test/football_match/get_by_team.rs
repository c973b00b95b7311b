use super::*;

/// Tests listing matches for a team.
///
/// Verifies that matches are found whether the team plays home or away and
/// that fixtures between other teams are excluded.
///
/// Expected: Ok with the home and the away fixture
#[tokio::test]
async fn finds_home_and_away_fixtures() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let rival = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;

    let at_home = factory::football_match::MatchFactory::new(db, &team.name, &rival.name)
        .match_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .build()
        .await?;
    let away = factory::football_match::MatchFactory::new(db, &rival.name, &team.name)
        .match_date(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap())
        .build()
        .await?;
    factory::create_match(db, &rival.name, &other.name).await?;

    let ids: Vec<_> = MatchRepository::new(db)
        .get_by_team(&team.name)
        .await?
        .iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec![at_home.id, away.id]);

    Ok(())
}

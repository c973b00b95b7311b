use super::*;

/// Tests listing results.
///
/// Verifies newest-first ordering, exclusion of deleted results, and that each
/// result carries only its own match's goals.
///
/// Expected: Ok with two hydrated results, newest first
#[tokio::test]
async fn lists_newest_first_with_goals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, first_match) = factory::helpers::create_match_with_teams(db).await?;
    let second_match = factory::create_match(db, &away.name, &home.name).await?;
    let third_match = factory::create_match(db, &home.name, &away.name).await?;

    let repo = MatchResultRepository::new(db);
    let older = repo
        .create(result_params(
            first_match.id,
            vec![goal("A", "10:00", Side::Home)],
        ))
        .await?;
    let newer = repo
        .create(result_params(
            second_match.id,
            vec![
                goal("B", "20:00", Side::Away),
                goal("C", "30:00", Side::Away),
            ],
        ))
        .await?;
    let deleted = repo
        .create(result_params(third_match.id, vec![]))
        .await?;
    repo.soft_delete(deleted.id).await?;

    let results = repo.get_all().await?;

    let ids: Vec<_> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(results[0].goals.len(), 2);
    assert_eq!(results[1].goals.len(), 1);
    assert_eq!(results[1].goals[0].scorer, "A");

    Ok(())
}

use super::*;

/// Tests the delete/restore cycle of a match.
///
/// Verifies that delete only succeeds on an active match and restore only on a
/// deleted one.
///
/// Expected: true, false, true, false
#[tokio::test]
async fn delete_and_restore_follow_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, fixture) = factory::helpers::create_match_with_teams(db).await?;

    let repo = MatchRepository::new(db);

    assert!(!repo.restore(fixture.id).await?);
    assert!(repo.soft_delete(fixture.id).await?);
    assert!(!repo.soft_delete(fixture.id).await?);
    assert!(!repo.exists(fixture.id).await?);
    assert!(repo.restore(fixture.id).await?);
    assert!(repo.find_by_id(fixture.id).await?.is_some());

    Ok(())
}

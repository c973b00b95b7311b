use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some) for a known user, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("coach")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("coach").await?.unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.role, "admin");
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

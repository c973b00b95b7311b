use super::*;

/// Tests creating a user account.
///
/// Expected: Ok with stored username and role
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, "admin");

    Ok(())
}

/// Tests creating two users with the same username.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: existing.username,
            password_hash: "hash".to_string(),
            role: "user".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

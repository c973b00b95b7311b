use super::*;

/// Tests bootstrapping the admin account.
///
/// Verifies the account is created once, can log in with the admin role, and
/// that a second call leaves it alone.
///
/// Expected: true, then false
#[tokio::test]
async fn creates_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let keys = TokenKeys::from_secret("test-secret");
    let service = AuthService::new(db, &keys);

    assert!(service.ensure_admin("root", "changeme").await?);
    assert!(!service.ensure_admin("root", "other").await?);

    let token = service.login("root", "changeme").await?;
    assert!(keys.validate(&token)?.is_admin());

    Ok(())
}

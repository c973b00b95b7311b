use super::*;

/// Tests admin token passing the admin permission check.
///
/// Expected: Ok(Claims) with role admin
#[test]
fn grants_access_to_admin() -> Result<(), AppError> {
    let keys = TokenKeys::from_secret("secret");
    let headers = bearer(&keys.issue("root", "admin")?);

    let claims = AuthGuard::new(&keys, &headers).require(&[Permission::Admin])?;

    assert_eq!(claims.username, "root");
    assert!(claims.is_admin());

    Ok(())
}

/// Tests a regular user hitting an admin endpoint.
///
/// Expected: Err(AuthError::Forbidden)
#[test]
fn denies_admin_access_to_user() -> Result<(), AppError> {
    let keys = TokenKeys::from_secret("secret");
    let headers = bearer(&keys.issue("fan", "user")?);

    let result = AuthGuard::new(&keys, &headers).require(&[Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(ref name))) if name == "fan"
    ));

    Ok(())
}

/// Tests a regular user on a read endpoint.
///
/// Expected: Ok(Claims)
#[test]
fn grants_read_access_to_user() -> Result<(), AppError> {
    let keys = TokenKeys::from_secret("secret");
    let headers = bearer(&keys.issue("fan", "user")?);

    let claims = AuthGuard::new(&keys, &headers).require(&[])?;

    assert_eq!(claims.role, "user");

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let keys = TokenKeys::from_secret("secret");
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests headers that are not a usable bearer token.
///
/// Expected: Err(AuthError::InvalidToken) for each
#[test]
fn rejects_malformed_header() {
    let keys = TokenKeys::from_secret("secret");

    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer not-a-jwt"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = AuthGuard::new(&keys, &headers).require(&[]);

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))),
            "accepted {value:?}"
        );
    }
}

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    model::auth::{ADMIN_ROLE, USER_ROLE},
    router::router,
    service::auth::TokenKeys,
    state::AppState,
};
use test_utils::{builder::TestBuilder, context::TestContext};


const SECRET: &str = "router-test-secret";

/// Router over a fresh in-memory database holding every table.
struct TestApp {
    test: TestContext,
    app: Router,
    keys: TokenKeys,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_match_result_tables()
            .with_table(entity::prelude::Player)
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let keys = TokenKeys::from_secret(SECRET);
        let app = router().with_state(AppState::new(db, keys.clone()));

        Self {
            test,
            app,
            keys,
        }
    }

    fn admin_token(&self) -> String {
        self.keys.issue("admin", ADMIN_ROLE).unwrap()
    }

    fn user_token(&self) -> String {
        self.keys.issue("fan", USER_ROLE).unwrap()
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Sends a request and returns the status with the body parsed as JSON, or as a
    /// plain string when it is not JSON.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, body)
    }

    async fn create_team(&self, name: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/teams",
                Some(&self.admin_token()),
                Some(team_body(name)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body
    }
}

fn team_body(name: &str) -> Value {
    json!({
        "name": name,
        "logo": format!("{}.png", name),
        "year_founded": 1900,
        "stadium_addr": "1 Stadium Way",
        "city": "Springfield",
    })
}

pub static PING_TAG: &str = "ping";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = PING_TAG,
    responses(
        (status = 200, description = "Server is up", body = String)
    ),
)]
pub async fn ping() -> &'static str {
    "pong"
}

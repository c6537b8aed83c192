use axum::http::StatusCode;

/// `GET /healthz` — liveness probe. Answers as long as the process is up.
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// `GET /readyz` — readiness probe. Services that hold a connection pool
/// can mount their own handler instead; this default always reports ready.
pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ready")
}

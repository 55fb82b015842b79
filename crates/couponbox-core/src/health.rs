use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`, the readiness probe. The coupons service has no
/// warm-up phase, so ready and alive coincide.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

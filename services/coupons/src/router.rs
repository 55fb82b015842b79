use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use couponbox_core::health::{healthz, readyz};
use couponbox_core::middleware::request_id_layer;

use crate::handlers::{
    admin_auth::{check_auth, login},
    admin_coupons::{create_coupon, list_coupons, set_coupon_active},
    claim::claim_coupon,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Visitor claim
        .route("/api/coupons/claim", post(claim_coupon))
        // Admin auth
        .route("/api/admin/login", post(login))
        .route("/api/admin/check-auth", get(check_auth))
        // Admin coupon pool
        .route("/api/admin/coupons", get(list_coupons))
        .route("/api/admin/coupons", post(create_coupon))
        .route("/api/admin/coupons/{id}", patch(set_coupon_active))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

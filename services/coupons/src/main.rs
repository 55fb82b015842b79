use sea_orm::Database;
use tracing::info;

use couponbox_coupons::config::CouponsConfig;
use couponbox_coupons::router::build_router;
use couponbox_coupons::state::AppState;

#[tokio::main]
async fn main() {
    couponbox_core::tracing::init_tracing();

    let config = CouponsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        claim_cooldown_secs: config.claim_cooldown_secs,
        cookie_secure: config.cookie_secure,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.coupons_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("coupons service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::cookies::{SESSION_ID, set_session_cookie};
use crate::state::AppState;
use crate::usecase::claim::{ClaimCouponUseCase, ClaimInput, cooldown_from_secs};

// ── POST /api/coupons/claim ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ClaimResponse {
    pub code: String,
}

pub async fn claim_coupon(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let ip = client_ip(&headers);

    // Read or mint the visitor session. The cookie is set even when the claim
    // is rejected, so a retried request carries the same identity.
    let (session_id, jar) = match jar.get(SESSION_ID) {
        Some(cookie) => (cookie.value().to_owned(), jar),
        None => {
            let fresh = Uuid::new_v4().to_string();
            let jar = set_session_cookie(jar, fresh.clone(), state.cookie_secure);
            (fresh, jar)
        }
    };

    let usecase = ClaimCouponUseCase {
        coupons: state.coupon_repo(),
        cooldown: cooldown_from_secs(state.claim_cooldown_secs),
    };
    let result = usecase
        .execute(ClaimInput {
            ip,
            session_id,
            now: Utc::now(),
        })
        .await;

    match result {
        Ok(coupon) => (jar, Json(ClaimResponse { code: coupon.code })).into_response(),
        Err(e) => (jar, e).into_response(),
    }
}

/// First entry of `x-forwarded-for`, trimmed; `"unknown"` when absent or blank.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| "unknown".to_owned())
}

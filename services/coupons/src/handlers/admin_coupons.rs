use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Coupon;
use crate::error::CouponsServiceError;
use crate::handlers::admin_auth::require_admin;
use crate::state::AppState;
use crate::usecase::manage::{
    CreateCouponInput, CreateCouponUseCase, ListCouponsUseCase, SetCouponActiveUseCase,
};

#[derive(Serialize)]
pub struct ClaimedByResponse {
    pub ip: String,
    pub session_id: String,
    #[serde(serialize_with = "couponbox_core::serde::to_rfc3339_ms")]
    pub claimed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct CouponResponse {
    pub id: String,
    pub code: String,
    pub is_active: bool,
    pub is_claimed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<ClaimedByResponse>,
    #[serde(serialize_with = "couponbox_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id.to_string(),
            code: coupon.code,
            is_active: coupon.is_active,
            is_claimed: coupon.is_claimed,
            claimed_by: coupon.claimed_by.map(|c| ClaimedByResponse {
                ip: c.ip,
                session_id: c.session_id,
                claimed_at: c.claimed_at,
            }),
            created_at: coupon.created_at,
        }
    }
}

// ── GET /api/admin/coupons ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ListCouponsResponse {
    pub coupons: Vec<CouponResponse>,
}

pub async fn list_coupons(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ListCouponsResponse>, CouponsServiceError> {
    require_admin(&state, &jar).await?;
    let usecase = ListCouponsUseCase {
        coupons: state.coupon_repo(),
    };
    let coupons = usecase.execute().await?;
    Ok(Json(ListCouponsResponse {
        coupons: coupons.into_iter().map(CouponResponse::from).collect(),
    }))
}

// ── POST /api/admin/coupons ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCouponRequest {
    #[serde(default)]
    pub code: String,
}

pub async fn create_coupon(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CreateCouponRequest>,
) -> Result<impl IntoResponse, CouponsServiceError> {
    require_admin(&state, &jar).await?;
    let usecase = CreateCouponUseCase {
        coupons: state.coupon_repo(),
    };
    let coupon = usecase
        .execute(CreateCouponInput { code: body.code })
        .await?;
    Ok((StatusCode::CREATED, Json(CouponResponse::from(coupon))))
}

// ── PATCH /api/admin/coupons/{id} ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

pub async fn set_coupon_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
    Json(body): Json<SetActiveRequest>,
) -> Result<StatusCode, CouponsServiceError> {
    require_admin(&state, &jar).await?;
    let usecase = SetCouponActiveUseCase {
        coupons: state.coupon_repo(),
    };
    usecase.execute(id, body.is_active).await?;
    Ok(StatusCode::OK)
}

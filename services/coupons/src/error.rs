use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Coupons service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CouponsServiceError {
    #[error("a coupon was already claimed from this address recently")]
    IpCooldown,
    #[error("this browser has already claimed a coupon")]
    SessionAlreadyClaimed,
    #[error("no coupons available")]
    Exhausted,
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("valid coupon code is required")]
    InvalidCouponCode,
    #[error("coupon code already exists")]
    DuplicateCouponCode,
    #[error("coupon not found")]
    CouponNotFound,
    #[error("coupon already claimed")]
    CouponAlreadyClaimed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CouponsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IpCooldown => "IP_COOLDOWN",
            Self::SessionAlreadyClaimed => "SESSION_ALREADY_CLAIMED",
            Self::Exhausted => "EXHAUSTED",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCouponCode => "INVALID_COUPON_CODE",
            Self::DuplicateCouponCode => "DUPLICATE_COUPON_CODE",
            Self::CouponNotFound => "COUPON_NOT_FOUND",
            Self::CouponAlreadyClaimed => "COUPON_ALREADY_CLAIMED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CouponsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::IpCooldown | Self::SessionAlreadyClaimed => StatusCode::TOO_MANY_REQUESTS,
            Self::Exhausted | Self::CouponNotFound => StatusCode::NOT_FOUND,
            Self::MissingCredentials | Self::InvalidCouponCode => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::DuplicateCouponCode | Self::CouponAlreadyClaimed => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

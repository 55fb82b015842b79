use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::cookies::{ADMIN_SESSION, set_admin_session_cookie};
use crate::domain::types::AdminSession;
use crate::error::CouponsServiceError;
use crate::state::AppState;
use crate::usecase::admin_auth::{CheckAuthUseCase, LoginInput, LoginUseCase};

/// Resolve the `admin_session` cookie to a live session, or 401.
/// Every admin-gated handler calls this first.
pub(crate) async fn require_admin(
    state: &AppState,
    jar: &CookieJar,
) -> Result<AdminSession, CouponsServiceError> {
    let value = jar
        .get(ADMIN_SESSION)
        .map(|c| c.value().to_owned())
        .ok_or(CouponsServiceError::Unauthorized)?;
    let session_id = value
        .parse::<Uuid>()
        .map_err(|_| CouponsServiceError::Unauthorized)?;
    let usecase = CheckAuthUseCase {
        sessions: state.admin_session_repo(),
    };
    usecase.execute(session_id).await
}

// ── POST /api/admin/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, CouponsServiceError> {
    let usecase = LoginUseCase {
        admins: state.admin_repo(),
        sessions: state.admin_session_repo(),
    };
    let session = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    let jar = set_admin_session_cookie(
        jar,
        session.session_id.to_string(),
        state.cookie_secure,
    );
    Ok((StatusCode::OK, jar))
}

// ── GET /api/admin/check-auth ────────────────────────────────────────────────

pub async fn check_auth(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<StatusCode, CouponsServiceError> {
    require_admin(&state, &jar).await?;
    Ok(StatusCode::OK)
}

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::types::AdminSession;
use crate::error::CouponsServiceError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct LoginUseCase<A: AdminRepository, S: AdminSessionRepository> {
    pub admins: A,
    pub sessions: S,
}

impl<A: AdminRepository, S: AdminSessionRepository> LoginUseCase<A, S> {
    pub async fn execute(&self, input: LoginInput) -> Result<AdminSession, CouponsServiceError> {
        if input.username.is_empty() || input.password.is_empty() {
            return Err(CouponsServiceError::MissingCredentials);
        }

        // Unknown user and wrong password are indistinguishable to the caller.
        let admin = self
            .admins
            .find_by_username(&input.username)
            .await?
            .ok_or(CouponsServiceError::InvalidCredentials)?;

        let hash = PasswordHash::new(&admin.password_hash)
            .map_err(|e| CouponsServiceError::Internal(anyhow::anyhow!("bad stored hash: {e}")))?;
        Argon2::default()
            .verify_password(input.password.as_bytes(), &hash)
            .map_err(|_| CouponsServiceError::InvalidCredentials)?;

        let session = AdminSession {
            session_id: Uuid::new_v4(),
            admin_id: admin.id,
            created_at: Utc::now(),
        };
        self.sessions.create(&session).await?;
        Ok(session)
    }
}

// ── CheckAuth ────────────────────────────────────────────────────────────────

pub struct CheckAuthUseCase<S: AdminSessionRepository> {
    pub sessions: S,
}

impl<S: AdminSessionRepository> CheckAuthUseCase<S> {
    /// Resolve a session cookie value to a live admin session.
    /// Expired sessions are treated the same as unknown ones.
    pub async fn execute(&self, session_id: Uuid) -> Result<AdminSession, CouponsServiceError> {
        let session = self
            .sessions
            .find(session_id)
            .await?
            .ok_or(CouponsServiceError::Unauthorized)?;
        if !session.is_valid(Utc::now()) {
            return Err(CouponsServiceError::Unauthorized);
        }
        Ok(session)
    }
}

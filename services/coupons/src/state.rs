use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAdminRepository, DbAdminSessionRepository, DbCouponRepository};

/// Shared application state passed to every handler via axum `State`.
/// The connection is opened once at startup and reused for the life of the
/// process; `DatabaseConnection` is a pool handle, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub claim_cooldown_secs: i64,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn coupon_repo(&self) -> DbCouponRepository {
        DbCouponRepository {
            db: self.db.clone(),
        }
    }

    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn admin_session_repo(&self) -> DbAdminSessionRepository {
        DbAdminSessionRepository {
            db: self.db.clone(),
        }
    }
}

#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{Admin, AdminSession, ClaimedBy, Coupon};
use crate::error::CouponsServiceError;

/// Repository for the coupon pool.
pub trait CouponRepository: Send + Sync {
    /// Whether any coupon was claimed from `ip` strictly after `since`.
    async fn has_claim_by_ip_since(
        &self,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<bool, CouponsServiceError>;

    /// Whether this visitor session has ever claimed a coupon. No time bound.
    async fn has_claim_by_session(&self, session_id: &str)
    -> Result<bool, CouponsServiceError>;

    /// The oldest coupon with `is_active && !is_claimed`, if any.
    async fn next_available(&self) -> Result<Option<Coupon>, CouponsServiceError>;

    /// Atomically reserve a coupon: set claim state on the row matching
    /// `id` **and** `is_claimed = false`. Returns `false` when a concurrent
    /// claimant already took it (zero rows matched).
    async fn try_reserve(&self, id: Uuid, claim: &ClaimedBy)
    -> Result<bool, CouponsServiceError>;

    async fn list_all(&self) -> Result<Vec<Coupon>, CouponsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>, CouponsServiceError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponsServiceError>;

    async fn create(&self, coupon: &Coupon) -> Result<(), CouponsServiceError>;

    /// Flip the active flag. Returns `false` if no such coupon exists.
    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, CouponsServiceError>;
}

/// Repository for administrator credentials.
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<Admin>, CouponsServiceError>;
}

/// Repository for admin login sessions.
pub trait AdminSessionRepository: Send + Sync {
    async fn create(&self, session: &AdminSession) -> Result<(), CouponsServiceError>;

    async fn find(&self, session_id: Uuid) -> Result<Option<AdminSession>, CouponsServiceError>;
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A distributable coupon code with activation and claim state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub is_active: bool,
    pub is_claimed: bool,
    pub claimed_by: Option<ClaimedBy>,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    /// Eligible for allocation: active and not yet claimed.
    pub fn is_available(&self) -> bool {
        self.is_active && !self.is_claimed
    }
}

/// Who claimed a coupon. Set exactly once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedBy {
    /// Best-effort request IP; the literal `"unknown"` when unresolvable.
    pub ip: String,
    /// Opaque visitor session token from the `session_id` cookie.
    pub session_id: String,
    pub claimed_at: DateTime<Utc>,
}

/// Administrator account with an argon2id password hash.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Cookie-backed admin session, valid for [`ADMIN_SESSION_TTL_SECS`] from creation.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: Uuid,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.created_at + chrono::Duration::seconds(ADMIN_SESSION_TTL_SECS)
    }
}

/// Default minimum wait between successful claims from one IP (24 hours).
/// Overridable via the `CLAIM_COOLDOWN_SECS` env var.
pub const DEFAULT_CLAIM_COOLDOWN_SECS: i64 = 86_400;

/// Admin session lifetime in seconds (24 hours).
pub const ADMIN_SESSION_TTL_SECS: i64 = 86_400;

/// Visitor session cookie Max-Age in seconds (30 days).
pub const VISITOR_SESSION_MAX_AGE_SECS: i64 = 2_592_000;

/// How many times the allocator re-selects after losing a reservation race
/// before reporting the pool exhausted.
pub const MAX_RESERVE_ATTEMPTS: u32 = 3;

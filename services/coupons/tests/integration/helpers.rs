use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use couponbox_coupons::domain::repository::{
    AdminRepository, AdminSessionRepository, CouponRepository,
};
use couponbox_coupons::domain::types::{Admin, AdminSession, ClaimedBy, Coupon};
use couponbox_coupons::error::CouponsServiceError;

// ── MockCouponRepo ───────────────────────────────────────────────────────────

/// In-memory coupon pool. `try_reserve` re-checks `is_claimed` under the lock,
/// so the conditional-write semantics of the real store hold here too and the
/// concurrency tests exercise a genuine race.
#[derive(Clone)]
pub struct MockCouponRepo {
    coupons: Arc<Mutex<Vec<Coupon>>>,
}

impl MockCouponRepo {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self {
            coupons: Arc::new(Mutex::new(coupons)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Coupon>>> {
        Arc::clone(&self.coupons)
    }
}

impl CouponRepository for MockCouponRepo {
    async fn has_claim_by_ip_since(
        &self,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<bool, CouponsServiceError> {
        Ok(self.coupons.lock().unwrap().iter().any(|c| {
            c.claimed_by
                .as_ref()
                .is_some_and(|b| b.ip == ip && b.claimed_at > since)
        }))
    }

    async fn has_claim_by_session(
        &self,
        session_id: &str,
    ) -> Result<bool, CouponsServiceError> {
        Ok(self.coupons.lock().unwrap().iter().any(|c| {
            c.claimed_by
                .as_ref()
                .is_some_and(|b| b.session_id == session_id)
        }))
    }

    async fn next_available(&self) -> Result<Option<Coupon>, CouponsServiceError> {
        Ok(self
            .coupons
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_available())
            .min_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn try_reserve(
        &self,
        id: Uuid,
        claim: &ClaimedBy,
    ) -> Result<bool, CouponsServiceError> {
        let mut coupons = self.coupons.lock().unwrap();
        match coupons.iter_mut().find(|c| c.id == id && !c.is_claimed) {
            Some(c) => {
                c.is_claimed = true;
                c.claimed_by = Some(claim.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<Coupon>, CouponsServiceError> {
        Ok(self.coupons.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>, CouponsServiceError> {
        Ok(self
            .coupons
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponsServiceError> {
        Ok(self
            .coupons
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn create(&self, coupon: &Coupon) -> Result<(), CouponsServiceError> {
        self.coupons.lock().unwrap().push(coupon.clone());
        Ok(())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, CouponsServiceError> {
        let mut coupons = self.coupons.lock().unwrap();
        match coupons.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── FlakyReserveRepo ─────────────────────────────────────────────────────────

/// Wraps a [`MockCouponRepo`] so the first `fail_first` reservation attempts
/// report a lost race without reserving anything. Drives the bounded-retry
/// path deterministically.
#[derive(Clone)]
pub struct FlakyReserveRepo {
    pub inner: MockCouponRepo,
    remaining_failures: Arc<AtomicU32>,
}

impl FlakyReserveRepo {
    pub fn new(inner: MockCouponRepo, fail_first: u32) -> Self {
        Self {
            inner,
            remaining_failures: Arc::new(AtomicU32::new(fail_first)),
        }
    }
}

impl CouponRepository for FlakyReserveRepo {
    async fn has_claim_by_ip_since(
        &self,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<bool, CouponsServiceError> {
        self.inner.has_claim_by_ip_since(ip, since).await
    }

    async fn has_claim_by_session(
        &self,
        session_id: &str,
    ) -> Result<bool, CouponsServiceError> {
        self.inner.has_claim_by_session(session_id).await
    }

    async fn next_available(&self) -> Result<Option<Coupon>, CouponsServiceError> {
        self.inner.next_available().await
    }

    async fn try_reserve(
        &self,
        id: Uuid,
        claim: &ClaimedBy,
    ) -> Result<bool, CouponsServiceError> {
        if self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Ok(false);
        }
        self.inner.try_reserve(id, claim).await
    }

    async fn list_all(&self) -> Result<Vec<Coupon>, CouponsServiceError> {
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>, CouponsServiceError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponsServiceError> {
        self.inner.find_by_code(code).await
    }

    async fn create(&self, coupon: &Coupon) -> Result<(), CouponsServiceError> {
        self.inner.create(coupon).await
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, CouponsServiceError> {
        self.inner.set_active(id, is_active).await
    }
}

// ── MockAdminRepo / MockAdminSessionRepo ─────────────────────────────────────

#[derive(Clone)]
pub struct MockAdminRepo {
    pub admins: Vec<Admin>,
}

impl MockAdminRepo {
    pub fn new(admins: Vec<Admin>) -> Self {
        Self { admins }
    }

    pub fn empty() -> Self {
        Self { admins: vec![] }
    }
}

impl AdminRepository for MockAdminRepo {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, CouponsServiceError> {
        Ok(self
            .admins
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}

#[derive(Clone)]
pub struct MockAdminSessionRepo {
    sessions: Arc<Mutex<Vec<AdminSession>>>,
}

impl MockAdminSessionRepo {
    pub fn new(sessions: Vec<AdminSession>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<AdminSession>>> {
        Arc::clone(&self.sessions)
    }
}

impl AdminSessionRepository for MockAdminSessionRepo {
    async fn create(&self, session: &AdminSession) -> Result<(), CouponsServiceError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find(
        &self,
        session_id: Uuid,
    ) -> Result<Option<AdminSession>, CouponsServiceError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn available_coupon(code: &str) -> Coupon {
    Coupon {
        id: Uuid::now_v7(),
        code: code.to_owned(),
        is_active: true,
        is_claimed: false,
        claimed_by: None,
        created_at: Utc::now(),
    }
}

pub fn claimed_coupon(code: &str, ip: &str, session_id: &str, claimed_at: DateTime<Utc>) -> Coupon {
    Coupon {
        id: Uuid::now_v7(),
        code: code.to_owned(),
        is_active: true,
        is_claimed: true,
        claimed_by: Some(ClaimedBy {
            ip: ip.to_owned(),
            session_id: session_id.to_owned(),
            claimed_at,
        }),
        created_at: claimed_at - Duration::hours(1),
    }
}

pub fn test_admin(username: &str, password: &str) -> Admin {
    Admin {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        username: username.to_owned(),
        password_hash: hash_password(password),
        created_at: Utc::now(),
    }
}

pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::CouponRepository;
use crate::domain::types::Coupon;
use crate::error::CouponsServiceError;

// ── ListCoupons ──────────────────────────────────────────────────────────────

pub struct ListCouponsUseCase<C: CouponRepository> {
    pub coupons: C,
}

impl<C: CouponRepository> ListCouponsUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Coupon>, CouponsServiceError> {
        self.coupons.list_all().await
    }
}

// ── CreateCoupon ─────────────────────────────────────────────────────────────

pub struct CreateCouponInput {
    pub code: String,
}

pub struct CreateCouponUseCase<C: CouponRepository> {
    pub coupons: C,
}

impl<C: CouponRepository> CreateCouponUseCase<C> {
    pub async fn execute(&self, input: CreateCouponInput) -> Result<Coupon, CouponsServiceError> {
        let code = input.code.trim();
        if code.is_empty() {
            return Err(CouponsServiceError::InvalidCouponCode);
        }
        if self.coupons.find_by_code(code).await?.is_some() {
            return Err(CouponsServiceError::DuplicateCouponCode);
        }
        // v7 ids sort by creation time, which is what the FIFO allocator
        // orders on.
        let coupon = Coupon {
            id: Uuid::now_v7(),
            code: code.to_owned(),
            is_active: true,
            is_claimed: false,
            claimed_by: None,
            created_at: Utc::now(),
        };
        self.coupons.create(&coupon).await?;
        Ok(coupon)
    }
}

// ── SetCouponActive ──────────────────────────────────────────────────────────

pub struct SetCouponActiveUseCase<C: CouponRepository> {
    pub coupons: C,
}

impl<C: CouponRepository> SetCouponActiveUseCase<C> {
    pub async fn execute(
        &self,
        id: Uuid,
        is_active: bool,
    ) -> Result<(), CouponsServiceError> {
        let coupon = self
            .coupons
            .find_by_id(id)
            .await?
            .ok_or(CouponsServiceError::CouponNotFound)?;
        // Claimed coupons are never re-offered; toggling them is pointless at
        // best and misleading at worst.
        if coupon.is_claimed {
            return Err(CouponsServiceError::CouponAlreadyClaimed);
        }
        if !self.coupons.set_active(id, is_active).await? {
            return Err(CouponsServiceError::CouponNotFound);
        }
        Ok(())
    }
}

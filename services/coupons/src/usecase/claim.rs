use chrono::{DateTime, Duration, Utc};

use crate::domain::repository::CouponRepository;
use crate::domain::types::{ClaimedBy, Coupon, MAX_RESERVE_ATTEMPTS};
use crate::error::CouponsServiceError;

pub struct ClaimInput {
    /// Request IP, or the literal `"unknown"` when unresolvable.
    pub ip: String,
    /// Opaque visitor session token. Issued by the caller, never here.
    pub session_id: String,
    pub now: DateTime<Utc>,
}

/// The claim allocator: hands out at most one coupon per visitor session,
/// ever, and at most one per IP per cooldown window.
pub struct ClaimCouponUseCase<C: CouponRepository> {
    pub coupons: C,
    pub cooldown: Duration,
}

impl<C: CouponRepository> ClaimCouponUseCase<C> {
    pub async fn execute(&self, input: ClaimInput) -> Result<Coupon, CouponsServiceError> {
        // 1. One claim per session, with no time bound. Checked before the IP
        //    cooldown so a returning winner always hears the permanent reason,
        //    not the one that lapses after a day.
        if self
            .coupons
            .has_claim_by_session(&input.session_id)
            .await?
        {
            return Err(CouponsServiceError::SessionAlreadyClaimed);
        }

        // 2. IP cooldown. Strict `>` on claimed_at vs (now - cooldown): a claim
        //    at exactly one cooldown later is allowed.
        let since = input.now - self.cooldown;
        if self.coupons.has_claim_by_ip_since(&input.ip, since).await? {
            return Err(CouponsServiceError::IpCooldown);
        }

        // Checks 1-2 may be stale by the time we write; the reservation below
        // is the only step that must not race. Worst case a visitor right at
        // the cooldown boundary sneaks through, which is a policy leak, not a
        // double allocation.
        let claim = ClaimedBy {
            ip: input.ip,
            session_id: input.session_id,
            claimed_at: input.now,
        };

        // 3-5. Select the oldest available coupon and reserve it with a
        // conditional write. Zero rows matched means a concurrent claimant got
        // there first; re-select from what remains, a bounded number of times.
        for _ in 0..MAX_RESERVE_ATTEMPTS {
            let Some(candidate) = self.coupons.next_available().await? else {
                return Err(CouponsServiceError::Exhausted);
            };
            if self.coupons.try_reserve(candidate.id, &claim).await? {
                return Ok(Coupon {
                    is_claimed: true,
                    claimed_by: Some(claim),
                    ..candidate
                });
            }
        }
        Err(CouponsServiceError::Exhausted)
    }
}

/// Cooldown duration from the configured number of seconds.
pub fn cooldown_from_secs(secs: i64) -> Duration {
    Duration::seconds(secs)
}

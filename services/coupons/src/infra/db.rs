use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

use couponbox_coupons_schema::{admin_sessions, admins, coupons};

use crate::domain::repository::{AdminRepository, AdminSessionRepository, CouponRepository};
use crate::domain::types::{Admin, AdminSession, ClaimedBy, Coupon};
use crate::error::CouponsServiceError;

// ── Coupon repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCouponRepository {
    pub db: DatabaseConnection,
}

impl CouponRepository for DbCouponRepository {
    async fn has_claim_by_ip_since(
        &self,
        ip: &str,
        since: DateTime<Utc>,
    ) -> Result<bool, CouponsServiceError> {
        let count = coupons::Entity::find()
            .filter(coupons::Column::ClaimedIp.eq(ip))
            .filter(coupons::Column::ClaimedAt.gt(since))
            .count(&self.db)
            .await
            .context("count claims by ip")?;
        Ok(count > 0)
    }

    async fn has_claim_by_session(
        &self,
        session_id: &str,
    ) -> Result<bool, CouponsServiceError> {
        let count = coupons::Entity::find()
            .filter(coupons::Column::ClaimedSessionId.eq(session_id))
            .count(&self.db)
            .await
            .context("count claims by session")?;
        Ok(count > 0)
    }

    async fn next_available(&self) -> Result<Option<Coupon>, CouponsServiceError> {
        let model = coupons::Entity::find()
            .filter(coupons::Column::IsActive.eq(true))
            .filter(coupons::Column::IsClaimed.eq(false))
            .order_by_asc(coupons::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find next available coupon")?;
        Ok(model.map(coupon_from_model))
    }

    async fn try_reserve(
        &self,
        id: Uuid,
        claim: &ClaimedBy,
    ) -> Result<bool, CouponsServiceError> {
        // Single conditional UPDATE filtered on `is_claimed = false`. The store
        // evaluates the filter at write time, so of two concurrent claimants
        // only one can match the row.
        let result = coupons::Entity::update_many()
            .col_expr(coupons::Column::IsClaimed, Expr::value(true))
            .col_expr(coupons::Column::ClaimedIp, Expr::value(claim.ip.clone()))
            .col_expr(
                coupons::Column::ClaimedSessionId,
                Expr::value(claim.session_id.clone()),
            )
            .col_expr(coupons::Column::ClaimedAt, Expr::value(claim.claimed_at))
            .filter(coupons::Column::Id.eq(id))
            .filter(coupons::Column::IsClaimed.eq(false))
            .exec(&self.db)
            .await
            .context("reserve coupon")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_all(&self) -> Result<Vec<Coupon>, CouponsServiceError> {
        let models = coupons::Entity::find()
            .order_by_asc(coupons::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list coupons")?;
        Ok(models.into_iter().map(coupon_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>, CouponsServiceError> {
        let model = coupons::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find coupon by id")?;
        Ok(model.map(coupon_from_model))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponsServiceError> {
        let model = coupons::Entity::find()
            .filter(coupons::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find coupon by code")?;
        Ok(model.map(coupon_from_model))
    }

    async fn create(&self, coupon: &Coupon) -> Result<(), CouponsServiceError> {
        coupons::ActiveModel {
            id: Set(coupon.id),
            code: Set(coupon.code.clone()),
            is_active: Set(coupon.is_active),
            is_claimed: Set(coupon.is_claimed),
            claimed_ip: Set(None),
            claimed_session_id: Set(None),
            claimed_at: Set(None),
            created_at: Set(coupon.created_at),
        }
        .insert(&self.db)
        .await
        .context("create coupon")?;
        Ok(())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<bool, CouponsServiceError> {
        let result = coupons::Entity::update_many()
            .col_expr(coupons::Column::IsActive, Expr::value(is_active))
            .filter(coupons::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set coupon active")?;
        Ok(result.rows_affected > 0)
    }
}

fn coupon_from_model(model: coupons::Model) -> Coupon {
    // claimed_* columns are set together; a partial record would be a bug
    // upstream, so treat it as unclaimed rather than panic.
    let claimed_by = match (model.claimed_ip, model.claimed_session_id, model.claimed_at) {
        (Some(ip), Some(session_id), Some(claimed_at)) => Some(ClaimedBy {
            ip,
            session_id,
            claimed_at,
        }),
        _ => None,
    };
    Coupon {
        id: model.id,
        code: model.code,
        is_active: model.is_active,
        is_claimed: model.is_claimed,
        claimed_by,
        created_at: model.created_at,
    }
}

// ── Admin repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, CouponsServiceError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find admin by username")?;
        Ok(model.map(|m| Admin {
            id: m.id,
            username: m.username,
            password_hash: m.password_hash,
            created_at: m.created_at,
        }))
    }
}

// ── Admin session repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminSessionRepository {
    pub db: DatabaseConnection,
}

impl AdminSessionRepository for DbAdminSessionRepository {
    async fn create(&self, session: &AdminSession) -> Result<(), CouponsServiceError> {
        admin_sessions::ActiveModel {
            session_id: Set(session.session_id),
            admin_id: Set(session.admin_id),
            created_at: Set(session.created_at),
        }
        .insert(&self.db)
        .await
        .context("create admin session")?;
        Ok(())
    }

    async fn find(
        &self,
        session_id: Uuid,
    ) -> Result<Option<AdminSession>, CouponsServiceError> {
        let model = admin_sessions::Entity::find_by_id(session_id)
            .one(&self.db)
            .await
            .context("find admin session")?;
        Ok(model.map(|m| AdminSession {
            session_id: m.session_id,
            admin_id: m.admin_id,
            created_at: m.created_at,
        }))
    }
}

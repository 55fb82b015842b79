use sea_orm::entity::prelude::*;

/// A distributable coupon code. The three `claimed_*` columns are set
/// together exactly once by the allocator and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub is_active: bool,
    pub is_claimed: bool,
    pub claimed_ip: Option<String>,
    pub claimed_session_id: Option<String>,
    pub claimed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! sea-orm entities for the coupons service.

pub mod admin_sessions;
pub mod admins;
pub mod coupons;

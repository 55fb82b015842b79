pub mod admin_auth;
pub mod admin_coupons;
pub mod claim;

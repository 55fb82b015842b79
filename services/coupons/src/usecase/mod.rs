pub mod admin_auth;
pub mod claim;
pub mod manage;

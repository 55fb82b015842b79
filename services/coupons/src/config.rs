use crate::domain::types::DEFAULT_CLAIM_COOLDOWN_SECS;

/// Coupons service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CouponsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3114). Env var: `COUPONS_PORT`.
    pub coupons_port: u16,
    /// Per-IP claim cooldown in seconds (default 86400 = 24h).
    /// Env var: `CLAIM_COOLDOWN_SECS`.
    pub claim_cooldown_secs: i64,
    /// Whether cookies carry the Secure attribute (default true; set
    /// `COOKIE_SECURE=false` for plain-HTTP local development).
    pub cookie_secure: bool,
}

impl CouponsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            coupons_port: std::env::var("COUPONS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            claim_cooldown_secs: std::env::var("CLAIM_COOLDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CLAIM_COOLDOWN_SECS),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

//! Cookie builders for the visitor session and the admin session.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::domain::types::{ADMIN_SESSION_TTL_SECS, VISITOR_SESSION_MAX_AGE_SECS};

/// Cookie name for the anonymous visitor session.
pub const SESSION_ID: &str = "session_id";

/// Cookie name for the admin session.
pub const ADMIN_SESSION: &str = "admin_session";

/// Set the visitor session cookie (httpOnly, 30-day Max-Age, path `/`).
pub fn set_session_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_ID, value))
        .path("/")
        .max_age(Duration::seconds(VISITOR_SESSION_MAX_AGE_SECS))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Set the admin session cookie (httpOnly, 24-hour Max-Age, path `/`).
pub fn set_admin_session_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION, value))
        .path("/")
        .max_age(Duration::seconds(ADMIN_SESSION_TTL_SECS))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

//! Bearer-token session cookie.
//!
//! The token lives in an HTTP-only cookie owned by the hosting frontend's
//! route layer; these helpers keep the attribute set in one place. Presence
//! of the cookie is all this layer checks — token validity is the backend's
//! call, detected reactively when an authenticated request comes back
//! 401/403.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name shared by the admin frontend and its route handlers.
pub const AUTH_COOKIE: &str = "auth_token";

const AUTH_COOKIE_MAX_AGE: Duration = Duration::days(7);

/// Cookie attributes that vary per deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// `Secure` flag; must stay off for plain-HTTP local deployments or the
    /// browser will drop the cookie entirely.
    pub secure: bool,
}

/// Reads the bearer token, if a session cookie is present.
pub fn auth_token(jar: &CookieJar) -> Option<String> {
    jar.get(AUTH_COOKIE).map(|cookie| cookie.value().to_string())
}

/// Installs the session cookie on login: http-only, same-site lax, path `/`,
/// 7-day expiry.
pub fn set_auth_token(jar: CookieJar, token: String, session: SessionConfig) -> CookieJar {
    let cookie = Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .secure(session.secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(AUTH_COOKIE_MAX_AGE)
        .build();
    jar.add(cookie)
}

/// Drops the session cookie on logout or when a dead session is detected.
/// The removal cookie must carry the same path the setter used.
pub fn clear_auth_token(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(AUTH_COOKIE).path("/").build())
}

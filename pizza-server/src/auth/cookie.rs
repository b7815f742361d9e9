//! `auth-token` 会话 Cookie
//!
//! Set-Cookie 头手工拼装: HttpOnly, Path=/, SameSite=Lax，
//! 生产环境追加 Secure。

use http::HeaderMap;
use http::header::{COOKIE, HeaderValue, InvalidHeaderValue};

/// Cookie 名称
pub const AUTH_COOKIE: &str = "auth-token";

fn attributes(secure: bool) -> &'static str {
    if secure {
        "Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    }
}

/// Set-Cookie value carrying a session token
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!("{AUTH_COOKIE}={token}; {}", attributes(secure)))
}

/// Set-Cookie value that expires the session cookie immediately
pub fn clear_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("auth-token=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax; Secure")
    } else {
        HeaderValue::from_static("auth-token=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax")
    }
}

/// Read the session token from the request's Cookie headers
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

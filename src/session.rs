//! Cookie Session Store
//!
//! Keeps the bearer token in the `auth_token` cookie for seven days.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use taskboard_core::session::{SessionStore, SESSION_TTL_DAYS, TOKEN_COOKIE};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Bytes not allowed raw in a cookie value
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// `document.cookie`-backed token store
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSessionStore;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn write_cookie(cookie: &str) {
    match html_document() {
        Some(doc) => {
            if doc.set_cookie(cookie).is_err() {
                log::error!("failed to write session cookie");
            }
        }
        None => log::error!("no document available for session cookie"),
    }
}

impl SessionStore for CookieSessionStore {
    fn save(&self, token: &str) {
        let max_age = u64::from(SESSION_TTL_DAYS) * SECONDS_PER_DAY;
        write_cookie(&build_cookie(TOKEN_COOKIE, token, max_age));
    }

    fn get(&self) -> Option<String> {
        let jar = html_document()?.cookie().ok()?;
        parse_cookie(&jar, TOKEN_COOKIE)
    }

    fn remove(&self) {
        write_cookie(&expire_cookie(TOKEN_COOKIE));
    }
}

pub fn build_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; max-age={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(value, COOKIE_VALUE),
        max_age_secs
    )
}

pub fn expire_cookie(name: &str) -> String {
    format!("{}=; max-age=0; path=/; SameSite=Lax", name)
}

/// Find `name` in a `document.cookie` string. Empty values count as absent.
pub fn parse_cookie(jar: &str, name: &str) -> Option<String> {
    jar.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cookie() {
        assert_eq!(
            build_cookie("auth_token", "abc.def", 604800),
            "auth_token=abc.def; max-age=604800; path=/; SameSite=Lax"
        );
        assert_eq!(
            build_cookie("auth_token", "a b;c", 10),
            "auth_token=a%20b%3Bc; max-age=10; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_parse_cookie() {
        let jar = "theme=dark; auth_token=a%20b%3Bc; other=1";
        assert_eq!(parse_cookie(jar, "auth_token").as_deref(), Some("a b;c"));
        assert_eq!(parse_cookie(jar, "theme").as_deref(), Some("dark"));
        assert_eq!(parse_cookie(jar, "missing"), None);
        assert_eq!(parse_cookie("auth_token=", "auth_token"), None);
        assert_eq!(parse_cookie("", "auth_token"), None);
    }

    #[test]
    fn test_round_trip_jwt() {
        let jwt = "eyJhbGciOiJIUzI1NiJ9.eyJ1c2VyX2lkIjoxfQ.sig-_=";
        let cookie = build_cookie(TOKEN_COOKIE, jwt, 1);
        let pair = cookie.split(';').next().unwrap();
        assert_eq!(parse_cookie(pair, TOKEN_COOKIE).as_deref(), Some(jwt));
    }

    #[test]
    fn test_expire_cookie() {
        assert!(expire_cookie(TOKEN_COOKIE).starts_with("auth_token=; max-age=0"));
    }
}

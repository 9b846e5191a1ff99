//! Session Store
//!
//! Persistence of the opaque bearer token issued at login. The browser
//! keeps it in a cookie; tests substitute [`MemorySessionStore`].

use std::sync::Mutex;

/// Cookie name holding the token
pub const TOKEN_COOKIE: &str = "auth_token";
/// Token lifetime, fixed at save time
pub const SESSION_TTL_DAYS: u32 = 7;

/// Token storage capability.
///
/// `get` is called fresh for every outgoing request, so implementations
/// must not cache across calls.
pub trait SessionStore: Send + Sync {
    fn save(&self, token: &str);

    fn get(&self) -> Option<String>;

    fn remove(&self);

    /// Presence check only; an expired token still counts until evicted.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn remove(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

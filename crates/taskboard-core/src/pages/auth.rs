//! Login / Register Controllers

use crate::api::{ApiClient, ApiError};
use crate::domain::{Credentials, Registration};
use crate::routes::Route;

use super::state::StateHandle;

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Fields whose first server message is surfaced, in priority order
const REGISTER_FIELDS: [&str; 3] = ["username", "email", "password"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub submitting: bool,
    pub error: Option<String>,
    /// Registration succeeded; the page shows a confirmation then moves on
    pub registered: bool,
}

impl AuthState {
    fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    fn reject(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

fn login_error_message(error: &ApiError) -> String {
    error.detail_message().unwrap_or_else(|| LOGIN_FAILED.to_string())
}

fn register_error_message(error: &ApiError) -> String {
    error
        .first_field_message(&REGISTER_FIELDS)
        .or_else(|| {
            let body = error.body()?;
            ["non_field_errors", "message"].iter().find_map(|key| {
                match body.get(key)? {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Array(items) => items.first()?.as_str().map(str::to_string),
                    _ => None,
                }
            })
        })
        .unwrap_or_else(|| REGISTER_FAILED.to_string())
}

#[derive(Clone)]
pub struct LoginFlow<H> {
    api: ApiClient,
    state: H,
}

impl<H: StateHandle<AuthState>> LoginFlow<H> {
    pub fn new(api: ApiClient, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Already-authenticated users skip straight to the dashboard
    pub fn redirect_if_authenticated(&self) -> bool {
        let present = self.api.session().is_present();
        if present {
            self.api.navigator().navigate(Route::Dashboard);
        }
        present
    }

    pub async fn submit(&self, credentials: Credentials) {
        if let Err(e) = credentials.validate() {
            self.state.modify(|s| s.error = Some(e.to_string()));
            return;
        }

        self.state.modify(|s| s.begin());
        match self.api.login(&credentials).await {
            Ok(response) => {
                self.api.session().save(&response.access);
                self.state.modify(|s| s.submitting = false);
                log::info!("Logged in as {}", credentials.username);
                self.api.navigator().navigate(Route::Dashboard);
            }
            Err(e) => {
                log::error!("Login failed: {}", e);
                self.state.modify(|s| s.reject(login_error_message(&e)));
            }
        }
    }
}

#[derive(Clone)]
pub struct RegisterFlow<H> {
    api: ApiClient,
    state: H,
}

impl<H: StateHandle<AuthState>> RegisterFlow<H> {
    pub fn new(api: ApiClient, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn redirect_if_authenticated(&self) -> bool {
        let present = self.api.session().is_present();
        if present {
            self.api.navigator().navigate(Route::Dashboard);
        }
        present
    }

    /// Returns true once the account exists; call [`Self::finish`] after
    /// showing the confirmation.
    pub async fn submit(&self, form: Registration) -> bool {
        if let Err(e) = form.validate() {
            self.state.modify(|s| s.error = Some(e.to_string()));
            return false;
        }

        self.state.modify(|s| s.begin());
        match self.api.register(&form.request()).await {
            Ok(()) => {
                log::info!("Registered {}", form.username.trim());
                self.state.modify(|s| {
                    s.submitting = false;
                    s.registered = true;
                });
                true
            }
            Err(e) => {
                log::error!("Registration failed: {}", e);
                self.state.modify(|s| s.reject(register_error_message(&e)));
                false
            }
        }
    }

    pub fn finish(&self) {
        self.api.navigator().navigate(Route::Login);
    }
}

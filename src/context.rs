//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use taskboard_core::api::ApiClient;
use taskboard_core::routes::Route;

use crate::config;
use crate::navigator::BrowserNavigator;
use crate::session::CookieSessionStore;
use crate::transport::GlooTransport;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// REST client wired to fetch, the session cookie and the router
    pub api: ApiClient,
    /// Current screen
    pub route: ReadSignal<Route>,
    navigator: BrowserNavigator,
}

impl AppContext {
    pub fn new(route: RwSignal<Route>) -> Self {
        let navigator = BrowserNavigator::new(route);
        let api = ApiClient::new(
            config::api_config(),
            Arc::new(GlooTransport),
            Arc::new(CookieSessionStore),
            Arc::new(navigator),
        );
        Self {
            api,
            route: route.read_only(),
            navigator,
        }
    }

    pub fn navigator(&self) -> BrowserNavigator {
        self.navigator
    }
}

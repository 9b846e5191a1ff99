//! History Navigator
//!
//! Routes are a signal mirrored into the address bar with pushState.

use leptos::prelude::*;
use taskboard_core::routes::{Navigator, Route};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy)]
pub struct BrowserNavigator {
    route: RwSignal<Route>,
}

impl BrowserNavigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }

    pub fn current_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    pub fn current_route() -> Route {
        Self::current_path()
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Dashboard)
    }

    /// Follow back/forward buttons
    pub fn listen_popstate(&self) {
        let route = self.route;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            route.set(Self::current_route());
        });
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        let already_there = Self::current_path().as_deref() == Some(route.path());
        if !already_there {
            let pushed = web_sys::window()
                .and_then(|w| w.history().ok())
                .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
            if !matches!(pushed, Some(Ok(()))) {
                log::warn!("could not push history entry for {}", route.path());
            }
        }
        if set_route(self.route, route) {
            log::debug!("navigate to {}", route.path());
        }
    }
}

/// Only a real change notifies; re-setting the current route would
/// rebuild the page and drop its state.
fn set_route(route: RwSignal<Route>, next: Route) -> bool {
    if route.get_untracked() == next {
        return false;
    }
    route.set(next);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_same_route_keeps_current_page() {
        let route = RwSignal::new(Route::Login);
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let page = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            route.get()
        });

        assert_eq!(page.get_untracked(), Route::Login);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(!set_route(route, Route::Login));
        assert_eq!(page.get_untracked(), Route::Login);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(set_route(route, Route::Dashboard));
        assert_eq!(page.get_untracked(), Route::Dashboard);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}

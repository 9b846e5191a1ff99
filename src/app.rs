//! Taskboard App
//!
//! Root component: owns the route signal and switches between pages.

use leptos::prelude::*;
use taskboard_core::routes::Route;

use crate::context::AppContext;
use crate::navigator::BrowserNavigator;
use crate::pages::{DashboardPage, LoginPage, RegisterPage};

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(BrowserNavigator::current_route());

    let ctx = AppContext::new(route);
    ctx.navigator().listen_popstate();
    let current = ctx.route;
    provide_context(ctx);

    view! {
        <main class="app">
            {move || match current.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Register => view! { <RegisterPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            }}
        </main>
    }
}

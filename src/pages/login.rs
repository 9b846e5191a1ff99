//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::domain::{Credentials, Registration};
use taskboard_core::pages::{AuthState, LoginFlow};
use taskboard_core::routes::{Navigator, Route};

use crate::components::AuthForm;
use crate::context::AppContext;
use crate::store::SignalState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigator = ctx.navigator();
    let state = SignalState::new(AuthState::default());
    let flow = LoginFlow::new(ctx.api.clone(), state);

    // Already logged in: straight to the dashboard
    let guard = flow.clone();
    Effect::new(move |_| {
        guard.redirect_if_authenticated();
    });

    let on_submit = Callback::new(move |form: Registration| {
        let flow = flow.clone();
        spawn_local(async move {
            flow.submit(Credentials {
                username: form.username,
                password: form.password,
            })
            .await;
        });
    });

    view! {
        <div class="auth-page">
            <AuthForm
                title="Login"
                submitting=state.select(|s| s.submitting)
                error=state.select(|s| s.error.clone())
                on_submit=on_submit
            />
            <p class="auth-switch">
                "Don't have an account? "
                <a
                    href=Route::Register.path()
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigator.navigate(Route::Register);
                    }
                >
                    "Sign up"
                </a>
            </p>
        </div>
    }
}

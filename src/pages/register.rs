//! Register Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::domain::Registration;
use taskboard_core::pages::{AuthState, RegisterFlow};
use taskboard_core::routes::{Navigator, Route};

use crate::components::AuthForm;
use crate::config::REGISTER_REDIRECT_MS;
use crate::context::AppContext;
use crate::store::SignalState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigator = ctx.navigator();
    let state = SignalState::new(AuthState::default());
    let flow = RegisterFlow::new(ctx.api.clone(), state);

    let guard = flow.clone();
    Effect::new(move |_| {
        guard.redirect_if_authenticated();
    });

    let on_submit = Callback::new(move |form: Registration| {
        let flow = flow.clone();
        spawn_local(async move {
            if flow.submit(form).await {
                TimeoutFuture::new(REGISTER_REDIRECT_MS).await;
                flow.finish();
            }
        });
    });

    let registered = state.select(|s| s.registered);

    view! {
        <div class="auth-page">
            <Show
                when=move || registered.get()
                fallback=move || view! {
                    <AuthForm
                        title="Register"
                        is_register=true
                        submitting=state.select(|s| s.submitting)
                        error=state.select(|s| s.error.clone())
                        on_submit=on_submit
                    />
                    <p class="auth-switch">
                        "Already have an account? "
                        <a
                            href=Route::Login.path()
                            on:click=move |ev| {
                                ev.prevent_default();
                                navigator.navigate(Route::Login);
                            }
                        >
                            "Sign in"
                        </a>
                    </p>
                }
            >
                <div class="card success-card">
                    <div class="success-icon">"✓"</div>
                    <h2>"Registration Successful!"</h2>
                    <p>"Your account has been created successfully. Redirecting to login..."</p>
                    <div class="spinner"></div>
                </div>
            </Show>
        </div>
    }
}

//! Auth Form Component
//!
//! Shared login/register form. Login only uses username and password.

use leptos::prelude::*;
use taskboard_core::domain::Registration;

#[component]
pub fn AuthForm(
    title: &'static str,
    #[prop(optional)] is_register: bool,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_submit: Callback<Registration>,
) -> impl IntoView {
    let form = RwSignal::new(Registration::default());

    let mismatch = move || is_register && form.with(|f| f.passwords_mismatch());
    let blocked = move || is_register && form.with(|f| f.password != f.confirm_password);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if blocked() {
            return;
        }
        on_submit.run(form.get());
    };

    view! {
        <div class="card auth-card">
            <h2>{title}</h2>

            {move || error.get().map(|msg| view! { <div class="error-banner" role="alert">{msg}</div> })}

            <form class="auth-form" on:submit=submit>
                <div class="form-field">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        class="input-field"
                        required
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </div>

                <Show when=move || is_register>
                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="input-field"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                </Show>

                <div class="form-field">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        class="input-field"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>

                <Show when=move || is_register>
                    <div class="form-field">
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            class="input-field"
                            required
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                        <Show when=mismatch>
                            <p class="field-error">"Passwords do not match"</p>
                        </Show>
                    </div>
                </Show>

                <button
                    type="submit"
                    class="btn-primary full-width"
                    disabled=move || submitting.get() || blocked()
                >
                    {move || if submitting.get() { "Loading..." } else { title }}
                </button>
            </form>
        </div>
    }
}

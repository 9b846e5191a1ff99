//! Delete Confirm Button Component
//!
//! Delete action of a task row. Deleting is the one destructive call the
//! dashboard makes and the server has no undo, so the row asks first:
//! "Delete", then "Delete?" with ✓/✗. Only ✓ reaches `on_confirm`.

use leptos::prelude::*;

/// Two-step delete for a task row
///
/// # Arguments
/// * `disabled` - The dashboard's submitting flag; no new delete starts
///   while another task request is in flight
/// * `on_confirm` - Issues the DELETE. The row stays until the server
///   acknowledges it.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    title="Delete this task"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Keep it"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

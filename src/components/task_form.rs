//! Task Form Component
//!
//! Create/edit form. Input is validated locally; only a clean draft is
//! handed to `on_submit`.

use leptos::prelude::*;
use taskboard_core::domain::{Priority, Task, TaskDraft};

#[component]
pub fn TaskForm(
    /// Record being edited; `None` for a new task
    initial: Option<Task>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<TaskDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let start = initial.as_ref().map(Task::to_draft).unwrap_or_default();

    let (title, set_title) = signal(start.title);
    let (description, set_description) = signal(start.description.unwrap_or_default());
    let (completed, set_completed) = signal(start.completed);
    let (priority, set_priority) = signal(start.priority);
    let (invalid, set_invalid) = signal::<Option<String>>(None);

    let draft = move || TaskDraft {
        title: title.get(),
        description: Some(description.get()),
        completed: completed.get(),
        priority: priority.get(),
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft().validate() {
            Ok(clean) => {
                set_invalid.set(None);
                on_submit.run(clean);
            }
            Err(e) => set_invalid.set(Some(e.to_string())),
        }
    };

    let submit_label = move || {
        if submitting.get() {
            "Saving..."
        } else if is_edit {
            "Update Task"
        } else {
            "Add Task"
        }
    };

    view! {
        <form class="task-form" on:submit=submit>
            <div class="form-field">
                <label for="title">"Task Title *"</label>
                <input
                    type="text"
                    id="title"
                    class="input-field"
                    placeholder="Enter task title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    class="input-field"
                    rows="3"
                    placeholder="Enter task description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="priority">"Priority"</label>
                <select
                    id="priority"
                    class="input-field"
                    prop:value=move || priority.get().as_str()
                    on:change=move |ev| set_priority.set(Priority::from_str(&event_target_value(&ev)))
                >
                    {Priority::ALL.iter().map(|p| view! {
                        <option value=p.as_str()>{p.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || is_edit>
                <div class="form-field checkbox">
                    <input
                        type="checkbox"
                        id="completed"
                        prop:checked=move || completed.get()
                        on:change=move |ev| set_completed.set(event_target_checked(&ev))
                    />
                    <label for="completed">"Mark as completed"</label>
                </div>
            </Show>

            {move || invalid.get().map(|msg| view! { <p class="field-error">{msg}</p> })}

            <div class="form-actions">
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || submitting.get() || !draft().is_submittable()
                >
                    {submit_label}
                </button>
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

//! Task Item Component
//!
//! One task row: completion checkbox, content, and edit/delete actions.

use leptos::prelude::*;
use taskboard_core::domain::Task;
use web_sys::HtmlInputElement;

use crate::components::DeleteConfirmButton;
use crate::format::{format_created, local_offset_minutes};

#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle: Callback<(u32, bool)>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let created = format_created(task.created_at, local_offset_minutes());
    let priority = task.priority;
    let description = task.description.clone();
    let title = task.title.clone();

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                class="task-check"
                checked=completed
                on:change=move |ev| {
                    // Show the cached value until the server confirms; a
                    // successful toggle re-keys and redraws the row
                    event_target::<HtmlInputElement>(&ev).set_checked(completed);
                    on_toggle.run((id, !completed));
                }
            />

            <div class="task-content">
                <h3 class="task-title">{title}</h3>
                {description.map(|d| view! { <p class="task-description">{d}</p> })}
                <p class="task-meta">
                    <span class=format!("priority-badge {}", priority.as_str())>{priority.label()}</span>
                    <span class="task-created">"Created: " {created}</span>
                </p>
            </div>

            <div class="task-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(task.clone())>"Edit"</button>
                <DeleteConfirmButton disabled=busy on_confirm=move |_| on_delete.run(id) />
            </div>
        </div>
    }
}

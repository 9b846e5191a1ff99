//! Task List Component
//!
//! Stats cards, filter/sort selectors and the derived task list.

use leptos::prelude::*;
use taskboard_core::domain::Task;
use taskboard_core::view_model::{derive_view, SortKey, TaskFilter};

use crate::components::TaskItem;

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle: Callback<(u32, bool)>,
) -> impl IntoView {
    let (filter, set_filter) = signal(TaskFilter::All);
    let (sort_key, set_sort_key) = signal(SortKey::Newest);

    // Recomputed only when tasks, filter or sort key change
    let task_view = Memo::new(move |_| tasks.with(|t| derive_view(t, filter.get(), sort_key.get())));
    let stats = Memo::new(move |_| task_view.with(|v| v.stats));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading tasks..."</p>
                </div>
            }
        >
            <div class="task-list">
                <div class="stats-grid">
                    <div class="card stat total">
                        <div class="stat-value">{move || stats.get().total}</div>
                        <div class="stat-label">"Total"</div>
                    </div>
                    <div class="card stat completed">
                        <div class="stat-value">{move || stats.get().completed}</div>
                        <div class="stat-label">"Completed"</div>
                    </div>
                    <div class="card stat pending">
                        <div class="stat-value">{move || stats.get().pending}</div>
                        <div class="stat-label">"Pending"</div>
                    </div>
                </div>

                <div class="card list-controls">
                    <label>
                        "Filter: "
                        <select
                            prop:value=move || filter.get().as_str()
                            on:change=move |ev| set_filter.set(TaskFilter::from_str(&event_target_value(&ev)))
                        >
                            {TaskFilter::ALL.iter().map(|f| view! {
                                <option value=f.as_str()>{f.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label>
                        "Sort by: "
                        <select
                            prop:value=move || sort_key.get().as_str()
                            on:change=move |ev| set_sort_key.set(SortKey::from_str(&event_target_value(&ev)))
                        >
                            {SortKey::ALL.iter().map(|k| view! {
                                <option value=k.as_str()>{k.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <Show
                    when=move || task_view.with(|v| !v.is_empty())
                    fallback=move || {
                        let (heading, hint) = filter.get().empty_state();
                        view! {
                            <div class="card empty-state">
                                <div class="empty-icon">"📋"</div>
                                <h3>{heading}</h3>
                                <p>{hint}</p>
                            </div>
                        }
                    }
                >
                    <div class="task-items">
                        <For
                            each=move || task_view.get().visible
                            key=|task| {
                                // Every mutable field, so a server update re-renders the row
                                (
                                    task.id,
                                    task.completed,
                                    task.title.clone(),
                                    task.description.clone(),
                                    task.priority,
                                    task.updated_at,
                                )
                            }
                            children=move |task| view! {
                                <TaskItem
                                    task=task
                                    busy=busy
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_toggle=on_toggle
                                />
                            }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}

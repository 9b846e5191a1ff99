//! Dashboard Page
//!
//! Task list plus the create/edit form. Requires a session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::domain::{Task, TaskDraft};
use taskboard_core::pages::{Dashboard, DashboardState, FormMode, StateHandle};

use crate::components::{ErrorBanner, TaskForm, TaskList};
use crate::context::AppContext;
use crate::store::SignalState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let state = SignalState::new(DashboardState::default());
    let dashboard = Dashboard::new(ctx.api.clone(), state);

    // Load once on mount
    let mounting = dashboard.clone();
    Effect::new(move |_| {
        let dashboard = mounting.clone();
        spawn_local(async move {
            dashboard.mount().await;
        });
    });

    let tasks = state.select(|s| s.tasks.clone());
    let form = state.select(|s| s.form.clone());
    let loading = state.select(|s| s.loading);
    let submitting = state.select(|s| s.submitting);
    let error = state.select(|s| s.error.clone());

    let on_create = {
        let dashboard = dashboard.clone();
        Callback::new(move |draft: TaskDraft| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.create(draft).await });
        })
    };

    let on_update = {
        let dashboard = dashboard.clone();
        Callback::new(move |draft: TaskDraft| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.update(draft).await });
        })
    };

    let on_toggle = {
        let dashboard = dashboard.clone();
        Callback::new(move |(id, completed): (u32, bool)| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.toggle(id, completed).await });
        })
    };

    let on_delete = {
        let dashboard = dashboard.clone();
        Callback::new(move |id: u32| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.delete(id).await });
        })
    };

    let on_logout = {
        let dashboard = dashboard.clone();
        move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.logout().await });
        }
    };

    let on_edit = Callback::new(move |task: Task| state.modify(|s| s.start_edit(task)));
    let on_cancel = Callback::new(move |_: ()| state.modify(|s| s.cancel_form()));
    let on_dismiss = Callback::new(move |_: ()| state.modify(|s| s.dismiss_error()));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"My Tasks"</h1>
                <button class="btn-secondary" on:click=on_logout>"Logout"</button>
            </header>

            <ErrorBanner message=error on_dismiss=on_dismiss />

            {move || match form.get() {
                FormMode::Hidden => view! {
                    <button
                        class="btn-primary add-task"
                        on:click=move |_| state.modify(|s| s.open_create_form())
                    >
                        "+ Add New Task"
                    </button>
                }
                .into_any(),
                FormMode::Create => view! {
                    <TaskForm
                        initial=None
                        submitting=submitting
                        on_submit=on_create
                        on_cancel=on_cancel
                    />
                }
                .into_any(),
                FormMode::Edit(task) => view! {
                    <TaskForm
                        initial=Some(task)
                        submitting=submitting
                        on_submit=on_update
                        on_cancel=on_cancel
                    />
                }
                .into_any(),
            }}

            <TaskList
                tasks=tasks
                loading=loading
                busy=submitting
                on_edit=on_edit
                on_delete=on_delete
                on_toggle=on_toggle
            />
        </div>
    }
}

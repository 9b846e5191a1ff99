//! UI Components
//!
//! Presentational Leptos components. They hold only local input state and
//! report user intents upward through callbacks.

mod auth_form;
mod delete_confirm_button;
mod error_banner;
mod task_form;
mod task_item;
mod task_list;

pub use auth_form::AuthForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;

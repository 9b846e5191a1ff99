//! Taskboard Core
//!
//! Layered architecture:
//! - domain: Task records, request bodies and local validation
//! - view_model: Filter/sort/stats derivation for the task list
//! - session: Token storage abstraction
//! - routes: Client-side routes and the navigation capability
//! - api: REST client over an injectable HTTP transport
//! - pages: Page controllers and their state records

pub mod domain;
pub mod view_model;
pub mod session;
pub mod routes;
pub mod api;
pub mod pages;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiConfig, ApiError, ApiResult, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use domain::{Credentials, Priority, Registration, Task, TaskDraft, ValidationError};
pub use routes::{Navigator, Route};
pub use session::{MemorySessionStore, SessionStore, SESSION_TTL_DAYS, TOKEN_COOKIE};
pub use view_model::{derive_view, SortKey, TaskFilter, TaskStats, TaskView};

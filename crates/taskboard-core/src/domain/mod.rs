//! Domain Layer
//!
//! Task records and auth payloads as exchanged with the REST API.
//! This layer has NO I/O (serde only).

mod task;
mod credentials;
mod error;

pub use task::{Priority, Task, TaskDraft, DESCRIPTION_MAX_CHARS, TITLE_MIN_CHARS};
pub use credentials::{Credentials, LoginResponse, Registration, RegisterRequest};
pub use error::{ValidationError, ValidationResult};

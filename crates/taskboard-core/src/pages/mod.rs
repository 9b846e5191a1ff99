//! Page Controllers
//!
//! Each page owns a small state record and an async controller that
//! orchestrates API calls and reconciles the record with their results.

mod state;
mod dashboard;
mod auth;


pub use state::StateHandle;
pub use dashboard::{Dashboard, DashboardState, FormMode};
pub use auth::{AuthState, LoginFlow, RegisterFlow, LOGIN_FAILED, REGISTER_FAILED};

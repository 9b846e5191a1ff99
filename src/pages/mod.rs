//! Pages
//!
//! One component per route. Each wires a core page controller to a
//! signal-backed state record and the presentational components.

mod dashboard;
mod login;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;

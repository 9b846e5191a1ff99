//! Client Routes
//!
//! The three screens and the capability used to move between them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Unknown paths land on the dashboard, whose guard handles auth.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            _ => Route::Dashboard,
        }
    }
}

/// Navigation capability injected into the API client and page controllers
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

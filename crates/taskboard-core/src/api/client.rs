//! API Client
//!
//! Every request reads the session token fresh, attaches it as a bearer
//! header, and turns a 401 into session invalidation plus a redirect to
//! the login screen before the error reaches the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::domain::{Credentials, LoginResponse, RegisterRequest, Task, TaskDraft};
use crate::routes::{Navigator, Route};
use crate::session::SessionStore;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Join `path` onto the base URL without doubling or dropping slashes
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    // ========================
    // Auth
    // ========================

    pub async fn register(&self, body: &RegisterRequest) -> ApiResult<()> {
        self.send(HttpMethod::Post, "/auth/register/", Some(encode(body)?))
            .await
            .map(|_| ())
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let response = self
            .send(HttpMethod::Post, "/auth/login/", Some(encode(credentials)?))
            .await?;
        decode(&response)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.send(HttpMethod::Post, "/auth/logout/", None).await.map(|_| ())
    }

    // ========================
    // Tasks
    // ========================

    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let response = self.send(HttpMethod::Get, "/tasks/", None).await?;
        decode(&response)
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task> {
        let response = self
            .send(HttpMethod::Post, "/tasks/", Some(encode(draft)?))
            .await?;
        decode(&response)
    }

    /// PUT the full record; the server's copy replaces the cached one
    pub async fn update_task(&self, id: u32, task: &Task) -> ApiResult<Task> {
        let path = format!("/tasks/{}/", id);
        let response = self.send(HttpMethod::Put, &path, Some(encode(task)?)).await?;
        decode(&response)
    }

    pub async fn delete_task(&self, id: u32) -> ApiResult<()> {
        let path = format!("/tasks/{}/", id);
        self.send(HttpMethod::Delete, &path, None).await.map(|_| ())
    }

    // ========================
    // Plumbing
    // ========================

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        }
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> ApiResult<HttpResponse> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if response.is_success() {
            return Ok(response);
        }

        let body = serde_json::from_str(&response.body).ok();
        if response.status == 401 {
            log::warn!("{} {} returned 401, clearing session", method.as_str(), path);
            self.session.remove();
            self.navigator.navigate(Route::Login);
            return Err(ApiError::Unauthorized { body });
        }

        Err(ApiError::Status {
            status: response.status,
            body,
        })
    }
}

fn encode<T: Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("encode request: {}", e)))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

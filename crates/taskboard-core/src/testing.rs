//! Test Fakes
//!
//! Scripted transport, recording navigator and record builders shared by
//! the unit and integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::{ApiClient, ApiConfig, HttpRequest, HttpResponse, HttpTransport};
use crate::domain::{Priority, Task};
use crate::routes::{Navigator, Route};
use crate::session::MemorySessionStore;

pub const BASE_URL: &str = "http://api.test/api";

/// Task with a creation time of `secs` seconds after the epoch
pub fn task_at(id: u32, completed: bool, secs: i64) -> Task {
    Task {
        id,
        title: format!("Task {}", id),
        description: None,
        completed,
        priority: Priority::Medium,
        created_at: DateTime::<Utc>::from_timestamp(secs, 0).expect("valid timestamp"),
        updated_at: None,
    }
}

/// JSON the server would return for `task`
pub fn task_json(task: &Task) -> String {
    serde_json::to_string(task).expect("serializable task")
}

#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("a request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}

/// A client wired to fakes, with handles kept for assertions
pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<FakeTransport>,
    pub session: Arc<MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_session(MemorySessionStore::new())
    }

    pub fn logged_in() -> Self {
        Self::with_session(MemorySessionStore::with_token("tok-123"))
    }

    fn with_session(session: MemorySessionStore) -> Self {
        let transport = Arc::new(FakeTransport::default());
        let session = Arc::new(session);
        let navigator = Arc::new(RecordingNavigator::default());
        let client = ApiClient::new(
            ApiConfig::new(BASE_URL),
            transport.clone(),
            session.clone(),
            navigator.clone(),
        );
        Self {
            client,
            transport,
            session,
            navigator,
        }
    }
}

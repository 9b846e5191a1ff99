//! API Client Tests
//!
//! Exercises the client against a scripted transport.

use serde_json::json;

use crate::api::{ApiError, HttpMethod};
use crate::domain::{Credentials, Registration, TaskDraft};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::testing::{task_at, task_json, Harness, BASE_URL};

#[tokio::test]
async fn test_list_tasks_attaches_bearer_token() {
    let h = Harness::logged_in();
    let body = format!("[{}, {}]", task_json(&task_at(1, false, 10)), task_json(&task_at(2, true, 20)));
    h.transport.respond(200, body);

    let tasks = h.client.list_tasks().await.expect("list succeeds");
    assert_eq!(tasks.len(), 2);

    let req = h.transport.last_request();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, format!("{}/tasks/", BASE_URL));
    assert_eq!(req.header("authorization"), Some("Bearer tok-123"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let h = Harness::new();
    h.transport.respond(200, "[]");

    h.client.list_tasks().await.unwrap();
    assert_eq!(h.transport.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn test_token_read_fresh_per_request() {
    let h = Harness::logged_in();
    h.transport.respond(200, "[]").respond(200, "[]").respond(200, "[]");

    h.client.list_tasks().await.unwrap();
    h.session.save("rotated");
    h.client.list_tasks().await.unwrap();
    h.session.remove();
    h.client.list_tasks().await.unwrap();

    let auth: Vec<Option<String>> = h
        .transport
        .requests()
        .iter()
        .map(|r| r.header("Authorization").map(str::to_string))
        .collect();
    assert_eq!(
        auth,
        vec![Some("Bearer tok-123".to_string()), Some("Bearer rotated".to_string()), None]
    );
}

#[tokio::test]
async fn test_create_task_posts_draft() {
    let h = Harness::logged_in();
    h.transport.respond(201, task_json(&task_at(9, false, 50)));

    let draft = TaskDraft::new("Plan trip").with_description("flights");
    let created = h.client.create_task(&draft).await.unwrap();
    assert_eq!(created.id, 9);

    let req = h.transport.last_request();
    assert_eq!(req.method, HttpMethod::Post);
    let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({"title": "Plan trip", "description": "flights", "completed": false, "priority": "medium"}));
}

#[tokio::test]
async fn test_update_task_puts_full_record() {
    let h = Harness::logged_in();
    let task = task_at(4, false, 30).with_completed(true);
    h.transport.respond(200, task_json(&task));

    let updated = h.client.update_task(4, &task).await.unwrap();
    assert!(updated.completed);

    let req = h.transport.last_request();
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.url, format!("{}/tasks/4/", BASE_URL));
    let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["id"], 4);
    assert_eq!(sent["title"], "Task 4");
    assert_eq!(sent["completed"], true);
    assert_eq!(sent["description"], "");
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let h = Harness::logged_in();
    h.transport.respond(204, "");

    h.client.delete_task(12).await.expect("delete succeeds");
    let req = h.transport.last_request();
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.url, format!("{}/tasks/12/", BASE_URL));
}

#[tokio::test]
async fn test_401_clears_session_and_redirects() {
    let h = Harness::logged_in();
    h.transport.respond_json(401, json!({"detail": "Token is invalid or expired"}));

    let err = h.client.list_tasks().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.detail_message().as_deref(), Some("Token is invalid or expired"));
    assert!(!h.session.is_present());
    assert_eq!(h.navigator.visited(), vec![Route::Login]);
}

#[tokio::test]
async fn test_other_failures_propagate_unchanged() {
    let h = Harness::logged_in();
    h.transport.respond(500, "<html>oops</html>").fail("connection refused");

    let err = h.client.list_tasks().await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: None });

    let err = h.client.delete_task(1).await.unwrap_err();
    assert_eq!(err, ApiError::Network("connection refused".to_string()));

    assert!(h.session.is_present());
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn test_bad_payload_is_decode_error() {
    let h = Harness::logged_in();
    h.transport.respond(200, r#"{"not": "a list"}"#);

    let err = h.client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_login_returns_access_token() {
    let h = Harness::new();
    h.transport.respond_json(200, json!({"access": "jwt-access", "refresh": "jwt-refresh"}));

    let creds = Credentials { username: "alice".into(), password: "pw".into() };
    let response = h.client.login(&creds).await.unwrap();
    assert_eq!(response.access, "jwt-access");

    let req = h.transport.last_request();
    assert_eq!(req.url, format!("{}/auth/login/", BASE_URL));
    let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({"username": "alice", "password": "pw"}));
}

#[tokio::test]
async fn test_register_and_logout_paths() {
    let h = Harness::logged_in();
    h.transport.respond_json(201, json!({"id": 1, "username": "alice"})).respond(200, "");

    let form = Registration {
        username: "alice".into(),
        email: "a@example.com".into(),
        password: "pw12345678".into(),
        confirm_password: "pw12345678".into(),
    };
    h.client.register(&form.request()).await.unwrap();
    h.client.logout().await.unwrap();

    let urls: Vec<String> = h.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![format!("{}/auth/register/", BASE_URL), format!("{}/auth/logout/", BASE_URL)]
    );
    assert!(h.transport.last_request().body.is_none());
}

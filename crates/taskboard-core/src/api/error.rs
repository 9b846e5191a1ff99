//! API Errors

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: the session was invalidated and the client redirected to login
    #[error("authentication required")]
    Unauthorized { body: Option<Value> },
    /// Any other non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<Value> },
    /// No response arrived
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose payload could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { body } | ApiError::Status { body, .. } => body.as_ref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// The server's `detail`, falling back to `message`
    pub fn detail_message(&self) -> Option<String> {
        let body = self.body()?;
        ["detail", "message"]
            .iter()
            .find_map(|key| body.get(key).and_then(message_text))
    }

    /// First message of the first offending field, in `fields` order,
    /// formatted as "Username: <message>".
    pub fn first_field_message(&self, fields: &[&str]) -> Option<String> {
        let body = self.body()?;
        fields.iter().find_map(|field| {
            let text = body.get(field).and_then(message_text)?;
            Some(format!("{}: {}", capitalize(field), text))
        })
    }
}

/// A message is either a string or a list whose first entry is one
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(message_text),
        _ => None,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

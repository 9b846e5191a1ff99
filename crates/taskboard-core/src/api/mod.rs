//! REST API Client
//!
//! Auth and task endpoints over an injectable HTTP transport.

mod transport;
mod error;
mod client;

#[cfg(test)]
mod tests;

pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use error::{ApiError, ApiResult};
pub use client::{ApiClient, ApiConfig, DEFAULT_API_URL};

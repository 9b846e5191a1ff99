//! Fetch Transport
//!
//! `HttpTransport` over the browser fetch API via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use taskboard_core::api::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = RequestBuilder::new(&request.url).method(method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| e.to_string())?;

        let response = prepared.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        // Error statuses may carry no body at all
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

//! `ureq`-backed [`Transport`].
//!
//! Status codes are data, not errors: 4xx/5xx responses come back as
//! `HttpResponse` values for the caller to render. Only failures to obtain
//! a complete response (DNS, refused connection, TLS, timeout, unreadable
//! body) become `TransportError`.

use reqtext_core::http::canonical_header_name;
use reqtext_core::{HttpRequest, HttpResponse, Target, Transport, TransportError};
use tracing::debug;
use ureq::http;

/// Blocking HTTP transport using a shared `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = match &request.target {
            Target::Absolute(url) => url.as_str(),
            Target::Relative(reference) => {
                return Err(TransportError::new(format!(
                    "cannot send to relative target {reference:?}: no scheme or host"
                )));
            }
        };
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // An empty body is sent as no body at all.
        let result = if request.body.is_empty() {
            let wire = builder.body(()).map_err(TransportError::new)?;
            self.agent.run(wire)
        } else {
            let wire = builder
                .body(request.body.as_slice())
                .map_err(TransportError::new)?;
            self.agent.run(wire)
        };
        let mut response = result.map_err(TransportError::new)?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    canonical_header_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec();
        // Release the connection whether or not the read succeeded.
        drop(response);
        let body = body.map_err(TransportError::new)?;

        debug!(status, body_len = body.len(), "response body read");
        Ok(HttpResponse::new(status, headers, body))
    }
}

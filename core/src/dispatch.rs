//! Request dispatch and the end-to-end pipeline.
//!
//! # Design
//! The core never opens a socket. Executing a request is delegated to a
//! [`Transport`] supplied by the host, and [`run`] composes substitution,
//! parsing, dispatch and rendering around it. Any closure with the right
//! signature is a `Transport`, which keeps tests free of the network.

use tracing::{debug, info, warn};

use crate::error::{Error, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::parser::parse_request;
use crate::render::render;
use crate::substitute::{substitute, Environment, PlaceholderMap};

/// Executes a request against the network.
///
/// Implementations return every status code as a response; only failures to
/// obtain one (DNS, refused connection, TLS, timeout, unreadable body) are
/// errors. No retries.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// Send `request` through `transport`.
pub fn send<T: Transport + ?Sized>(
    transport: &T,
    request: &HttpRequest,
) -> Result<HttpResponse, Error> {
    debug!(
        method = %request.method,
        target = %request.target,
        headers = request.headers.len(),
        body_len = request.body.len(),
        "sending request"
    );
    let response = transport.execute(request).map_err(|e| {
        warn!(error = %e, "request failed");
        e
    })?;
    info!(
        status = response.status,
        headers = response.headers.len(),
        body_len = response.body.len(),
        "received response"
    );
    Ok(response)
}

/// Substitute placeholders from `env`, parse, send and render one document.
pub fn run<E, T>(input: &[u8], env: &E, transport: &T) -> Result<Vec<u8>, Error>
where
    E: Environment + ?Sized,
    T: Transport + ?Sized,
{
    let vars = PlaceholderMap::from_env(env);
    let request = parse_request(&substitute(input, &vars))?;
    let response = send(transport, &request)?;
    Ok(render(&response))
}

//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe a request and a response without touching the
//! network. The parser builds `HttpRequest` values, a host-supplied
//! [`Transport`](crate::Transport) turns them into `HttpResponse` values, and
//! the renderer writes those back out as text.
//!
//! Headers are kept as an ordered list of pairs so repeated names survive and
//! insertion order is preserved. All fields are owned.
//!
//! The request target is either an absolute URL or a relative reference kept
//! exactly as written. Only absolute targets can be sent.

use std::fmt;

use http::StatusCode;
use url::Url;

/// Ordered multi-map of header names to values.
pub type Headers = Vec<(String, String)>;

/// A request parsed from a text document.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Method token, stored verbatim (not checked against a fixed set).
    pub method: String,
    pub target: Target,
    pub headers: Headers,
    pub body: Vec<u8>,
}

/// Where a request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A URL with a scheme, normalized by the URL parser.
    Absolute(Url),
    /// A relative reference (`/items`, `api/items`, `../up`, `?q=1`), verbatim.
    Relative(String),
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Absolute(url) => url.as_str(),
            Target::Relative(reference) => reference,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Target::Absolute(_))
    }

    pub fn scheme(&self) -> Option<&str> {
        match self {
            Target::Absolute(url) => Some(url.scheme()),
            Target::Relative(_) => None,
        }
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            Target::Absolute(url) => url.host_str(),
            Target::Relative(_) => None,
        }
    }

    /// Path component. For a relative reference this is everything before
    /// the first `?` or `#`, possibly empty.
    pub fn path(&self) -> &str {
        match self {
            Target::Absolute(url) => url.path(),
            Target::Relative(reference) => reference
                .split(['?', '#'])
                .next()
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// All values for `name`, in insertion order. Names compare ASCII
    /// case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        header_values(&self.headers, name)
    }
}

impl HttpResponse {
    /// Build a response whose status text is the standard reason phrase for
    /// `status`, or empty when the code has none.
    pub fn new(status: u16, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status,
            status_text: reason_phrase(status).to_string(),
            headers,
            body,
        }
    }

    /// All values for `name`, in insertion order. Names compare ASCII
    /// case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        header_values(&self.headers, name)
    }
}

/// Standard reason phrase for a status code, empty if unknown.
pub fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}

/// Canonical MIME form of a header name: the first letter and every letter
/// following a hyphen are upper-cased, the rest lower-cased.
///
/// Names containing bytes outside the token set (spaces, separators) are
/// returned unchanged.
pub fn canonical_header_name(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn header_values<'a>(headers: &'a Headers, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    headers
        .iter()
        .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

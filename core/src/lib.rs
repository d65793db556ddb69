//! Plain-text HTTP request documents: substitute, parse, dispatch, render.
//!
//! # Overview
//! A request is written as a small text document:
//!
//! ```text
//! # comments and blank lines before the request line are ignored
//! POST https://{{HOST}}/items
//! Content-Type: application/json
//!
//! {"name": "widget"}
//! ```
//!
//! `{{NAME}}` placeholders are replaced from an [`Environment`], the result is
//! parsed into an [`HttpRequest`], a host-supplied [`Transport`] executes it,
//! and the [`HttpResponse`] is rendered back into the same style of text.
//!
//! # Design
//! - The crate performs no I/O. Environment access and HTTP execution are
//!   capabilities passed in by the caller, so everything here is
//!   deterministic under test.
//! - Headers are ordered `(name, value)` lists; repeated names are kept.
//! - Bodies are bytes end to end.

pub mod dispatch;
pub mod error;
pub mod http;
pub mod parser;
pub mod render;
pub mod substitute;

pub use dispatch::{run, send, Transport};
pub use error::{Error, ParseError, TransportError};
pub use crate::http::{HttpRequest, HttpResponse, Target};
pub use parser::parse_request;
pub use render::{parse_response, render};
pub use substitute::{substitute, Environment, PlaceholderMap};

//! Error types for parsing, dispatching and rendering request documents.
//!
//! # Design
//! Every failure is fatal to a single invocation, so the variants carry just
//! enough context for one diagnostic line. `ParseError` covers the text
//! format in both directions, `TransportError` wraps whatever the host's HTTP
//! client reported, and `Error` is the umbrella returned by the pipeline.

use thiserror::Error;

/// The request (or rendered response) text could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input ran out before a non-blank, non-comment line was found.
    #[error("no request line")]
    NoRequestLine,

    /// The request line did not split into exactly `METHOD URL`.
    #[error("invalid first line: {0}")]
    InvalidFirstLine(String),

    #[error("invalid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header line did not split into exactly `name: value`.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A rendered response did not start with `HTTP/1.1 <code> <text>`.
    #[error("invalid status line: {0}")]
    InvalidStatusLine(String),
}

/// The transport failed before a response was received or fully read.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Errors returned by [`crate::run`] and the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse request: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to send request: {0}")]
    Transport(#[from] TransportError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

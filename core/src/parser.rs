//! Request text parser.
//!
//! # Design
//! A single forward scan over the document's lines with one state variable:
//!
//! - `SkipLeading`: blank lines and `#` comments are dropped until the
//!   request line (`METHOD URL`) is found.
//! - `Headers`: `name: value` lines accumulate in order; `#` comments are
//!   skipped and the first empty line moves on to the body.
//! - `Body`: every remaining line is appended with its terminator removed.
//!
//! No backtracking is needed. The body is a line-stripping join, so a
//! multi-line body loses its newlines.
//!
//! The request line and header lines are decoded as UTF-8 lossily: a byte
//! that is not valid UTF-8 in a header name or value becomes U+FFFD. Body
//! bytes are kept raw.

use tracing::trace;
use url::Url;

use crate::error::ParseError;
use crate::http::{HttpRequest, Target};

const HEADER_SEPARATOR: &str = ": ";

/// Base used only to check that a relative reference is well formed. It is
/// never stored.
const RELATIVE_BASE: &str = "http://relative.invalid/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SkipLeading,
    Headers,
    Body,
}

/// Parse a (substituted) request document.
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, ParseError> {
    let mut state = State::SkipLeading;
    let mut head = None;
    let mut headers = Vec::new();
    let mut body = Vec::new();

    for line in split_lines(input) {
        match state {
            State::SkipLeading => {
                let text = String::from_utf8_lossy(line);
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                head = Some(parse_request_line(&text)?);
                state = State::Headers;
            }
            State::Headers => {
                if line.is_empty() {
                    state = State::Body;
                    continue;
                }
                let text = String::from_utf8_lossy(line);
                if text.trim_start().starts_with('#') {
                    trace!(line = %text, "skipping comment");
                    continue;
                }
                headers.push(parse_header(&text)?);
            }
            State::Body => body.extend_from_slice(line),
        }
    }

    let (method, target) = head.ok_or(ParseError::NoRequestLine)?;
    trace!(%method, %target, headers = headers.len(), body_len = body.len(), "parsed request");

    Ok(HttpRequest {
        method,
        target,
        headers,
        body,
    })
}

/// Split `METHOD URL` on single spaces. The line is not trimmed, so stray
/// spaces count as empty tokens.
fn parse_request_line(line: &str) -> Result<(String, Target), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [method, url] = parts[..] else {
        return Err(ParseError::InvalidFirstLine(line.to_string()));
    };
    Ok((method.to_string(), parse_target(url)?))
}

/// An absolute URL, or failing that a relative reference that resolves
/// against a base. Relative references are stored as written.
fn parse_target(text: &str) -> Result<Target, ParseError> {
    let invalid = |source: url::ParseError| ParseError::InvalidUrl {
        url: text.to_string(),
        source,
    };
    match Url::parse(text) {
        Ok(url) => Ok(Target::Absolute(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE).map_err(invalid)?;
            Url::options()
                .base_url(Some(&base))
                .parse(text)
                .map_err(invalid)?;
            Ok(Target::Relative(text.to_string()))
        }
        Err(source) => Err(invalid(source)),
    }
}

/// Split a header line on the exact `": "` separator into exactly two parts.
fn parse_header(line: &str) -> Result<(String, String), ParseError> {
    let parts: Vec<&str> = line.split(HEADER_SEPARATOR).collect();
    match parts[..] {
        [name, value] => Ok((name.to_string(), value.to_string())),
        _ => Err(ParseError::InvalidHeader(line.to_string())),
    }
}

/// Lines of `input` with `\n` or `\r\n` terminators removed. A trailing
/// terminator does not produce an extra empty line; empty input has no lines.
fn split_lines(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let trimmed = input.strip_suffix(b"\n").unwrap_or(input);
    let lines = if input.is_empty() {
        None
    } else {
        Some(trimmed.split(|&b| b == b'\n'))
    };
    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

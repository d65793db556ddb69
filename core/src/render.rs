//! Response text serializer, and a reader for its output.
//!
//! # Format
//! ```text
//! HTTP/1.1 <status> <status text>
//!
//! <name>: <value>
//! ...
//!
//! <body>
//! ```
//! Lines are joined with `\n`. Repeated header names are written once per
//! value, in the order the response holds them. The body is written as-is.

use crate::error::ParseError;
use crate::http::HttpResponse;

const STATUS_PREFIX: &str = "HTTP/1.1";

/// Render `response` in the text format.
pub fn render(response: &HttpResponse) -> Vec<u8> {
    let mut head = format!(
        "{} {} {}\n\n",
        STATUS_PREFIX, response.status, response.status_text
    );
    for (name, value) in &response.headers {
        head.push_str(name);
        head.push_str(": ");
        head.push_str(value);
        head.push('\n');
    }
    head.push('\n');

    let mut out = head.into_bytes();
    out.extend_from_slice(&response.body);
    out
}

/// Read text produced by [`render`] back into a response.
///
/// The status text is taken from the text rather than recomputed, and the
/// body is everything after the blank line that ends the headers.
pub fn parse_response(input: &[u8]) -> Result<HttpResponse, ParseError> {
    let mut cursor = Cursor { input, pos: 0 };

    let status_line = cursor.next_line().unwrap_or_default();
    let status_line = String::from_utf8_lossy(status_line);
    let (status, status_text) = parse_status_line(&status_line)?;

    // The status line is followed by a blank line before the headers.
    match cursor.next_line() {
        Some(line) if line.is_empty() => {}
        Some(_) => return Err(ParseError::InvalidStatusLine(status_line.into_owned())),
        None => {}
    }

    let mut headers = Vec::new();
    while let Some(line) = cursor.next_line() {
        if line.is_empty() {
            break;
        }
        headers.push(parse_response_header(&String::from_utf8_lossy(line))?);
    }

    Ok(HttpResponse {
        status,
        status_text,
        headers,
        body: cursor.rest().to_vec(),
    })
}

/// Split on the first `": "` only; response values may contain the separator.
fn parse_response_header(line: &str) -> Result<(String, String), ParseError> {
    line.split_once(": ")
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))
}

fn parse_status_line(line: &str) -> Result<(u16, String), ParseError> {
    let invalid = || ParseError::InvalidStatusLine(line.to_string());
    let mut parts = line.splitn(3, ' ');
    if parts.next() != Some(STATUS_PREFIX) {
        return Err(invalid());
    }
    let status = parts
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(invalid)?;
    let status_text = parts.next().unwrap_or_default().to_string();
    Ok((status, status_text))
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next_line(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)], body: &[u8]) -> HttpResponse {
        HttpResponse::new(
            status,
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body.to_vec(),
        )
    }

    #[test]
    fn renders_status_headers_and_body() {
        let resp = response(200, &[("Content-Type", "text/plain")], b"hi");
        assert_eq!(
            render(&resp),
            b"HTTP/1.1 200 OK\n\nContent-Type: text/plain\n\nhi"
        );
    }

    #[test]
    fn renders_repeated_headers_once_per_value() {
        let resp = response(201, &[("Set-Cookie", "a=1"), ("Set-Cookie", "b=2")], b"");
        assert_eq!(
            String::from_utf8(render(&resp)).unwrap(),
            "HTTP/1.1 201 Created\n\nSet-Cookie: a=1\nSet-Cookie: b=2\n\n"
        );
    }

    #[test]
    fn renders_without_headers() {
        let resp = response(204, &[], b"");
        assert_eq!(render(&resp), b"HTTP/1.1 204 No Content\n\n\n");
    }

    #[test]
    fn unknown_status_keeps_trailing_space() {
        let resp = response(799, &[], b"x");
        assert_eq!(render(&resp), b"HTTP/1.1 799 \n\n\nx");
    }

    #[test]
    fn rendered_output_reads_back() {
        let resp = response(
            404,
            &[("Content-Type", "application/json"), ("X-A", "1"), ("X-A", "2")],
            b"{\n  \"error\": \"missing\"\n}\n",
        );
        let back = parse_response(&render(&resp)).unwrap();
        assert_eq!(back, resp);
        assert_eq!(render(&back), render(&resp));
    }

    #[test]
    fn header_value_containing_separator_reads_back() {
        let resp = response(200, &[("Warning", "199 - \"note: see docs\"")], b"x");
        let rendered = render(&resp);
        assert_eq!(
            String::from_utf8(rendered.clone()).unwrap(),
            "HTTP/1.1 200 OK\n\nWarning: 199 - \"note: see docs\"\n\nx"
        );
        assert_eq!(parse_response(&rendered).unwrap(), resp);
    }

    #[test]
    fn reads_back_response_without_headers() {
        let resp = response(204, &[], b"");
        assert_eq!(parse_response(&render(&resp)).unwrap(), resp);

        let resp = response(200, &[], b"\nleading newline");
        assert_eq!(parse_response(&render(&resp)).unwrap(), resp);
    }

    #[test]
    fn rejects_foreign_status_line() {
        let err = parse_response(b"HTTP/2 200 OK\n\n\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStatusLine(_)));
        let err = parse_response(b"HTTP/1.1 abc OK\n\n\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStatusLine(_)));
        let err = parse_response(b"").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStatusLine(_)));
    }

    #[test]
    fn rejects_malformed_header() {
        let err = parse_response(b"HTTP/1.1 200 OK\n\nbroken\n\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHeader(ref l) if l == "broken"));
    }

    #[test]
    fn status_line_without_text() {
        let resp = parse_response(b"HTTP/1.1 200").unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.status_text, "");
        assert!(resp.headers.is_empty());
    }
}

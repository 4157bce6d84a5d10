//! In-memory [`OutputSink`] that records what a response wrote.

use std::borrow::Cow;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};

use crate::errors::{CourierError, Result};

use super::sink::OutputSink;

/// Records status, headers and body of a single response.
///
/// Enforces the same rules as a live connection: headers are rejected
/// once the status line is out, and the status line is written once.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
    status_writes: usize,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status written so far, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of a header as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Number of explicit `write_status` calls that were accepted.
    pub fn status_writes(&self) -> usize {
        self.status_writes
    }

    /// Consume the recorder. A response that never wrote a status is `200 OK`.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        (self.status.unwrap_or(StatusCode::OK), self.headers, self.body)
    }
}

impl OutputSink for ResponseRecorder {
    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        if self.status.is_some() {
            return Err(CourierError::HeadersSent);
        }
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn write_status(&mut self, status: StatusCode) -> Result<()> {
        if self.status.is_some() {
            return Err(CourierError::StatusWritten);
        }
        self.status = Some(status);
        self.status_writes += 1;
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = ResponseRecorder::new();
        rec.set_header("Content-Type", "application/json").unwrap();
        rec.write_status(StatusCode::CREATED).unwrap();
        rec.write_body(b"{}").unwrap();

        assert_eq!(rec.status(), Some(StatusCode::CREATED));
        assert_eq!(rec.header("content-type"), Some("application/json"));
        assert_eq!(rec.body(), b"{}");
        assert_eq!(rec.status_writes(), 1);
    }

    #[test]
    fn headers_are_frozen_after_status() {
        let mut rec = ResponseRecorder::new();
        rec.write_status(StatusCode::OK).unwrap();
        let err = rec.set_header("X-Late", "1").unwrap_err();
        assert!(matches!(err, CourierError::HeadersSent));
        assert!(rec.headers().is_empty());
    }

    #[test]
    fn second_status_is_rejected() {
        let mut rec = ResponseRecorder::new();
        rec.write_status(StatusCode::OK).unwrap();
        assert!(matches!(
            rec.write_status(StatusCode::NOT_FOUND),
            Err(CourierError::StatusWritten)
        ));
        assert_eq!(rec.status(), Some(StatusCode::OK));
        assert_eq!(rec.status_writes(), 1);
    }

    #[test]
    fn body_without_status_implies_ok() {
        let mut rec = ResponseRecorder::new();
        rec.write_body(b"hi").unwrap();
        assert_eq!(rec.status(), Some(StatusCode::OK));
        assert_eq!(rec.status_writes(), 0);
        assert_eq!(rec.body_text(), "hi");
    }

    #[test]
    fn invalid_header_is_reported() {
        let mut rec = ResponseRecorder::new();
        assert!(matches!(
            rec.set_header("bad header", "x"),
            Err(CourierError::Header(_))
        ));
    }

    #[test]
    fn untouched_recorder_defaults_to_ok() {
        let (status, headers, body) = ResponseRecorder::new().into_parts();
        assert_eq!(status, StatusCode::OK);
        assert!(headers.is_empty());
        assert!(body.is_empty());
    }
}

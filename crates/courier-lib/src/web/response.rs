//! Writing payloads and errors as JSON responses.
//!
//! Neither entry point returns an error. Serialization failures turn into a
//! `500` error envelope, sink failures are logged, and if even the error
//! envelope cannot be serialized a fixed plain-text `500` is written.

use std::fmt;

use http::header::CONTENT_TYPE;
use http::StatusCode;
use serde::Serialize;

use crate::errors::Result;
use crate::json;

use super::envelope::ErrorEnvelope;
use super::log::LogSink;
use super::sink::OutputSink;

/// `Content-Type` of every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `Content-Type` of the last-resort response.
pub const FALLBACK_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body of the last-resort response.
pub const FALLBACK_BODY: &str = "Internal Server Error";

/// Send `data` to the client as indented JSON with `status`.
///
/// A `None` payload or a `204 No Content` status writes the status line
/// only; any payload passed alongside `204` is dropped.
///
/// `Content-Type` is set only once serialization has succeeded. If `data`
/// cannot be serialized the failure is logged and the client receives a
/// `500` envelope carrying the serializer's message instead.
pub fn respond<L, S, T>(log: &L, sink: &mut S, data: Option<&T>, status: StatusCode)
where
    L: LogSink + ?Sized,
    S: OutputSink + ?Sized,
    T: Serialize + ?Sized,
{
    let data = match data {
        Some(data) if status != StatusCode::NO_CONTENT => data,
        _ => {
            if let Err(e) = sink.write_status(status) {
                log.log(&format!("respond: writing status {}: {}", status.as_u16(), e));
            }
            return;
        }
    };

    match json::to_pretty_vec(data) {
        Ok(body) => send_json(log, sink, status, &body),
        Err(e) => {
            log.log(&format!("respond: marshalling JSON response: {}", e));
            respond_internal(log, sink, &ErrorEnvelope::new(e.to_string()));
        }
    }
}

/// Send `err` to the client as `{"error": "<message>"}` with `status`.
///
/// The message is used verbatim. Callers that want field-level detail build
/// an [`ErrorEnvelope`] themselves and pass it to [`respond`].
pub fn respond_error<L, S, E>(log: &L, sink: &mut S, err: &E, status: StatusCode)
where
    L: LogSink + ?Sized,
    S: OutputSink + ?Sized,
    E: fmt::Display + ?Sized,
{
    respond(log, sink, Some(&ErrorEnvelope::new(err.to_string())), status);
}

/// Recovery path after a payload failed to serialize. Never re-enters
/// [`respond`]: a second failure goes straight to the plain-text fallback.
fn respond_internal<L, S, T>(log: &L, sink: &mut S, envelope: &T)
where
    L: LogSink + ?Sized,
    S: OutputSink + ?Sized,
    T: Serialize + ?Sized,
{
    match json::to_pretty_vec(envelope) {
        Ok(body) => send_json(log, sink, StatusCode::INTERNAL_SERVER_ERROR, &body),
        Err(e) => {
            log.log(&format!("respond: marshalling error response: {}", e));
            if let Err(e) = write_fallback(sink) {
                log.log(&format!("respond: writing fallback response: {}", e));
            }
        }
    }
}

fn send_json<L, S>(log: &L, sink: &mut S, status: StatusCode, body: &[u8])
where
    L: LogSink + ?Sized,
    S: OutputSink + ?Sized,
{
    if let Err(e) = write_response(sink, JSON_CONTENT_TYPE, status, body) {
        log.log(&format!("respond: writing {} response: {}", status.as_u16(), e));
    }
}

fn write_fallback<S: OutputSink + ?Sized>(sink: &mut S) -> Result<()> {
    write_response(
        sink,
        FALLBACK_CONTENT_TYPE,
        StatusCode::INTERNAL_SERVER_ERROR,
        FALLBACK_BODY.as_bytes(),
    )
}

// Header, status, body: the sink freezes headers when the status goes out.
fn write_response<S: OutputSink + ?Sized>(
    sink: &mut S,
    content_type: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<()> {
    sink.set_header(CONTENT_TYPE.as_str(), content_type)?;
    sink.write_status(status)?;
    sink.write_body(body)
}

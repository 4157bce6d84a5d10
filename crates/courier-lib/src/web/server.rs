//! axum integration (feature `http-server`).
//!
//! A [`ResponseRecorder`] filled by [`respond`] converts straight into an
//! axum `Response`, so handlers can use the same writer as any other host.

use std::fmt;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

use super::log::LogSink;
use super::recorder::ResponseRecorder;
use super::response::{respond, respond_error};

impl IntoResponse for ResponseRecorder {
    fn into_response(self) -> Response {
        let (status, headers, body) = self.into_parts();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

/// Build an axum response for `data`, as [`respond`] would write it.
pub fn json_response<L, T>(log: &L, data: Option<&T>, status: StatusCode) -> Response
where
    L: LogSink + ?Sized,
    T: Serialize + ?Sized,
{
    let mut recorder = ResponseRecorder::new();
    respond(log, &mut recorder, data, status);
    recorder.into_response()
}

/// Build an axum response for `err`, as [`respond_error`] would write it.
pub fn error_response<L, E>(log: &L, err: &E, status: StatusCode) -> Response
where
    L: LogSink + ?Sized,
    E: fmt::Display + ?Sized,
{
    let mut recorder = ResponseRecorder::new();
    respond_error(log, &mut recorder, err, status);
    recorder.into_response()
}

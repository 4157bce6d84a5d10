//! The response-writing primitive offered by the host server.

use http::StatusCode;

use crate::errors::Result;

/// Destination for one HTTP response.
///
/// Calls arrive in a fixed order: headers, then the status line, then the
/// body. Headers are frozen once the status line has been written.
pub trait OutputSink {
    fn set_header(&mut self, name: &str, value: &str) -> Result<()>;

    fn write_status(&mut self, status: StatusCode) -> Result<()>;

    /// Write body bytes. A sink that has not seen a status line yet
    /// writes `200 OK` first.
    fn write_body(&mut self, body: &[u8]) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: StatusCode) -> Result<()> {
        (**self).write_status(status)
    }

    fn write_body(&mut self, body: &[u8]) -> Result<()> {
        (**self).write_body(body)
    }
}

//! JSON response writing.
//!
//! [`respond`] and [`respond_error`] turn a payload (or an error) into a
//! status line, headers and an indented JSON body on an [`OutputSink`].
//! Failures are reported to a [`LogSink`] and never returned to the caller.

pub mod envelope;
pub mod log;
pub mod recorder;
pub mod response;
pub mod sink;

// Feature-gated modules
#[cfg(feature = "http-server")]
pub mod server;

pub use envelope::{ErrorEnvelope, FieldError, FieldErrors};
pub use log::{LogSink, MemoryLog, TracingLog};
pub use recorder::ResponseRecorder;
pub use response::{respond, respond_error};
pub use sink::OutputSink;

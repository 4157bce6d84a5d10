//! Thin wrapper over `serde_json` fixing the body format of every response.
//!
//! The response writer depends on the exact output of [`to_pretty_vec`]:
//! two-space indentation per nesting level, no trailing newline.

use serde::Serialize;

/// Serialize a value to pretty-printed JSON bytes, ready to be written as a body.
///
/// Keeps the raw `serde_json::Error`, since the writer surfaces its text
/// verbatim in the recovery envelope.
pub fn to_pretty_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(value)
}

//! Log sinks that receive write and serialization failures.

use std::sync::{Mutex, PoisonError};

/// Write-only destination for diagnostic messages.
pub trait LogSink {
    fn log(&self, message: &str);
}

impl<F: Fn(&str)> LogSink for F {
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to `tracing` at ERROR level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn log(&self, message: &str) {
        tracing::error!(target: "courier::web", "{}", message);
    }
}

/// Keeps messages in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl LogSink for MemoryLog {
    fn log(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

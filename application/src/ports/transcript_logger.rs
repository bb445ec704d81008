//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording answer events
//! (dataset hits, fallback calls, remote failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! answered turn in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event for logging.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "dataset_hit", "gemini_response").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible:
/// logging failures must never disrupt the answering flow.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}

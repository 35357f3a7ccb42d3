use serde::Serialize;
use serde_json::Value;

/// One phase of a simulated process, shown for `duration_ms` before advancing.
///
/// Titles and descriptions are stored as translation keys and resolved at
/// render time, so a language switch never touches the sequencer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub id: String,
    pub title_key: String,
    pub description_key: String,
    /// Illustrative payload (headers, metrics, counts). Never interpreted.
    pub details: Value,
    pub duration_ms: u64,
}

impl Step {
    pub fn new(
        id: impl Into<String>,
        title_key: impl Into<String>,
        description_key: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title_key: title_key.into(),
            description_key: description_key.into(),
            details: Value::Null,
            duration_ms,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

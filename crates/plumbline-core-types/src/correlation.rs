//! Correlation types for validation-run tracking
//!
//! A batch caller validating many import jobs runs the engine once per
//! (reference, imported) pair. These types let every log event from one run
//! be correlated, and let callers thread an external trace id through.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single validation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Generate a new random RunId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier supplied by a caller that is itself part of a larger
/// pipeline (e.g. one import job inside a batch)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one validation run for correlation
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: RunId,
    pub trace_id: Option<TraceId>,
}

impl RunContext {
    /// Create a new context with a fresh RunId
    pub fn new() -> Self {
        Self {
            run_id: RunId::new(),
            trace_id: None,
        }
    }

    /// Create a context with an existing RunId
    pub fn with_run_id(run_id: RunId) -> Self {
        Self {
            run_id,
            trace_id: None,
        }
    }

    /// Add a TraceId to the context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

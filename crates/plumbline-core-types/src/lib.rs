//! Core types shared across Plumbline facilities
//!
//! This crate provides foundational types used by both the compare engine
//! and the logging facility:
//!
//! - **Correlation types**: RunId, TraceId, RunContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RunContext, RunId, TraceId};

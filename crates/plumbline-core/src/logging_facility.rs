//! Structured logging facility for Plumbline
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_run_start!`, `log_run_end!`, `log_run_error!`)
//! - Correlation via per-run ids (see `plumbline_core_types::correlation`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use plumbline_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_run_start!(op, ...)` - Log run start
//! - `log_run_end!(op, duration_ms = ...)` - Log run end
//! - `log_run_error!(op, err, duration_ms = ...)` - Log run error

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

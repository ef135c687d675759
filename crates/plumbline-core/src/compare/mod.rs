//! Tree reconciliation engine.
//!
//! Compares a reference spatial/containment tree against the tree
//! reconstructed after an import round-trip and produces a structured,
//! deterministic mismatch report.
//!
//! ## Entry point
//!
//! ```ignore
//! use plumbline_core::compare::engine::compare_trees;
//!
//! let report = compare_trees(&expected, &actual)?;
//! if report.has_errors {
//!     // structural divergence: lost nodes, renamed containment entities, ...
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical reports, down to
//!   the serialized bytes. Ambiguous same-name candidates are resolved by
//!   lowest positional index, never by error.
//! - **Completeness**: every divergence becomes a record; nothing is
//!   filtered or truncated. A run either returns a full report or fails
//!   input validation entirely.
//! - **Locality**: children are only ever aligned under an already-matched
//!   parent pair; matching never crosses into sibling subtrees.
//! - **Ignore markers**: loader-flagged subtrees are still paired for path
//!   continuity but contribute no records.

pub mod classify;
pub mod engine;
pub mod matcher;
pub mod model;
pub mod report;

pub use engine::{compare_trees, compare_trees_with_context};
pub use model::Report;

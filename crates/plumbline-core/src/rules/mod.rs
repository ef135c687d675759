//! Structural validation of input trees.
//!
//! Runs before matching: a tree that fails these checks aborts the whole
//! run with a [`StructuralInputError`](crate::errors::StructuralInputError).

pub mod invariants;
pub mod validation;

pub use validation::validate_tree;

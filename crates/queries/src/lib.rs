//! # Gradebook Query Engine
//!
//! This crate answers the fixed set of analytical questions the gradebook
//! supports: top performers, per-group and per-teacher averages, enrollment
//! listings, and "last session" grades.
//!
//! ## Architectural Principles
//!
//! - **Pure reads:** Every operation is a pure function of a
//!   [`datastore::Snapshot`] and its scalar parameters. The engine holds no
//!   state of its own and never mutates the store.
//! - **Absence is data:** An aggregate over zero rows is `None` ("no data"),
//!   never a fabricated zero. An unknown id yields an empty result, never an
//!   error.
//! - **Deterministic ordering:** Rows are produced in ascending id order and
//!   ranked with a stable sort, so identical input always yields identical
//!   output, ties included.
//!
//! ## Public API
//!
//! - `QueryEngine`: the stateless struct carrying the 12 operations.
//! - `StudentAverage`, `GroupAverage`, `GradeRow`: the typed result rows.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod results;

// Re-export the key components to create a clean, public-facing API.
pub use engine::QueryEngine;
pub use results::{GradeRow, GroupAverage, StudentAverage};

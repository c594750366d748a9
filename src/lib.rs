//! Gradebook - relational aggregation over academic records
//!
//! This crate re-exports all layers of the gradebook system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: reporting  — line-oriented report rendering
//! Layer 2: queries    — the 12 analytical operations
//! Layer 1: datastore  — in-memory catalog, snapshots, invariants
//! Layer 0: core-types — entity schema (ids and records)
//! ```

pub use core_types;
pub use datastore;
pub use queries;
pub use reporting;

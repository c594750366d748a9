//! # Gradebook Datastore
//!
//! This crate is the storage boundary of the system: an in-memory catalog of
//! academic records with an explicit snapshot handle for readers. It plays the
//! role a database adapter would play in a larger deployment, hiding the
//! storage representation behind a small, typed API.
//!
//! ## Architectural Principles
//!
//! - **Invariants at the boundary:** Uniqueness (emails, group and subject
//!   names) and referential integrity (every foreign id must exist) are
//!   enforced when records enter the store, so the query layer above can
//!   traverse the graph without re-validating it.
//! - **Snapshot reads:** Readers call [`Datastore::snapshot`] and hold the
//!   resulting [`Snapshot`] for the duration of one query operation. A
//!   snapshot is a held read lock: everything observed through it is a single
//!   consistent view, which is what the two-phase "last session" query
//!   requires.
//! - **Id order is insertion order:** Ids are sequential and the catalog is
//!   kept in ordered maps, so iteration is deterministic across runs.
//!
//! ## Public API
//!
//! - `Datastore`: the shared store; population, removal, and `snapshot()`.
//! - `Snapshot`: typed accessors and the relationship traversals.
//! - `DatastoreError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod snapshot;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatastoreError;
pub use snapshot::Snapshot;
pub use store::Datastore;

//! # Gradebook Reporting
//!
//! This crate renders query results as line-oriented text: one line per row,
//! averages at a fixed two-decimal precision, and an explicit `no data` line
//! wherever an aggregate had nothing to aggregate.
//!
//! ## Architectural Principles
//!
//! - **Rendering only:** No analytics happen here. The formatter maps each
//!   typed result from the `queries` crate onto an output sink and nothing
//!   else.
//! - **Honest absence:** An undefined average is printed as `no data`,
//!   never as `0.00` — a missing average and a zero average are different
//!   facts.
//!
//! ## Public API
//!
//! - `ReportWriter`: one rendering method per result kind.
//! - `SurveyParams` / `write_survey`: run all 12 operations over one snapshot
//!   and write the numbered sections.
//! - `ReportError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod survey;
pub mod writer;

// Re-export the key components to create a clean, public-facing API.
pub use error::ReportError;
pub use survey::{write_survey, SurveyParams};
pub use writer::ReportWriter;

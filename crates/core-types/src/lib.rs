//! # Gradebook Core Types
//!
//! This crate defines the entity schema of the gradebook: the five record types
//! (students, teachers, groups, subjects, grades) and the identifier newtypes
//! that link them together. It is the vocabulary every other layer speaks.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no dependencies on any other workspace crate.
//!   It contains data definitions only; all behavior lives in higher layers.
//! - **Ids over references:** Relationships are modeled as identifier fields
//!   (`Student.group_id`, `Subject.teacher_id`, ...) rather than mutually-held
//!   references. Parent-side navigation is an index lookup owned by the
//!   datastore, which avoids ownership cycles entirely.
//!
//! ## Public API
//!
//! - The id newtypes: `GroupId`, `TeacherId`, `StudentId`, `SubjectId`, `GradeId`.
//! - The records: `Group`, `Teacher`, `Student`, `Subject`, `Grade`.

// Declare the modules that constitute this crate.
pub mod ids;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use ids::{GradeId, GroupId, StudentId, SubjectId, TeacherId};
pub use records::{Grade, Group, Student, Subject, Teacher};

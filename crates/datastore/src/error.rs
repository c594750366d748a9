use core_types::{GroupId, StudentId, SubjectId, TeacherId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatastoreError {
    #[error("The datastore is unavailable: {0}")]
    Unavailable(String),

    #[error("A {0} with email '{1}' is already registered.")]
    DuplicateEmail(&'static str, String),

    #[error("A {0} named '{1}' already exists.")]
    DuplicateName(&'static str, String),

    #[error("No group with id {0} exists.")]
    UnknownGroup(GroupId),

    #[error("No teacher with id {0} exists.")]
    UnknownTeacher(TeacherId),

    #[error("No student with id {0} exists.")]
    UnknownStudent(StudentId),

    #[error("No subject with id {0} exists.")]
    UnknownSubject(SubjectId),
}

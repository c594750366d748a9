use crate::ids::{GradeId, GroupId, StudentId, SubjectId, TeacherId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named cohort of students. Group names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

/// A teacher. Emails are unique; a teacher may teach any number of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Teacher {
    /// The display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A student. Emails are unique; every student belongs to exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: GroupId,
}

impl Student {
    /// The display name, "first last". Must stay behaviorally identical to any
    /// store-side projection of the same value (same concatenation, one space).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A course of study. Subject names are unique; every subject is taught by
/// exactly one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub teacher_id: TeacherId,
}

/// A single score a student received in a subject on a given date.
///
/// Scores are unconstrained decimals; the engine never enforces a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub value: Decimal,
    pub date_received: NaiveDate,
}

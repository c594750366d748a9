use chrono::NaiveDate;
use core_types::Student;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A student ranked by the arithmetic mean of a set of their grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAverage {
    pub student: Student,
    pub average: Decimal,
}

/// A group's mean grade over some subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub group_name: String,
    pub average: Decimal,
}

/// One grade as reported: who received it, the score, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    pub full_name: String,
    pub grade: Decimal,
    pub date_received: NaiveDate,
}

//! Tests for the listing operations: subjects per teacher, students per
//! group, enrollment of a student, and the group/subject grade listing.

use crate::common::{campus, date};
use core_types::{GroupId, TeacherId};
use queries::QueryEngine;
use rust_decimal_macros::dec;

#[test]
fn subjects_by_teacher_lists_their_courses() {
    let c = campus();
    let snapshot = c.store.snapshot().unwrap();
    let engine = QueryEngine::new();

    let names: Vec<_> = engine
        .subjects_by_teacher(&snapshot, c.hopper)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Compilers", "Logic"]);

    assert!(engine
        .subjects_by_teacher(&snapshot, TeacherId(999))
        .is_empty());
}

#[test]
fn students_by_group_lists_members_in_insertion_order() {
    let c = campus();
    let snapshot = c.store.snapshot().unwrap();
    let engine = QueryEngine::new();

    let ids: Vec<_> = engine
        .students_by_group(&snapshot, c.alpha)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![c.ada, c.alan]);

    let beta_ids: Vec<_> = engine
        .students_by_group(&snapshot, c.beta)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(beta_ids, vec![c.barbara, c.edsger]);

    assert!(engine.students_by_group(&snapshot, GroupId(999)).is_empty());
}

#[test]
fn grades_by_group_and_subject_joins_both_filters() {
    let c = campus();
    c.store
        .record_grade(c.ada, c.compilers, dec!(88), Some(date(2024, 2, 1)))
        .unwrap();
    c.store
        .record_grade(c.alan, c.compilers, dec!(75), Some(date(2024, 2, 8)))
        .unwrap();
    // Wrong subject and wrong group, respectively.
    c.store
        .record_grade(c.ada, c.logic, dec!(99), Some(date(2024, 2, 1)))
        .unwrap();
    c.store
        .record_grade(c.barbara, c.compilers, dec!(60), Some(date(2024, 2, 1)))
        .unwrap();

    let snapshot = c.store.snapshot().unwrap();
    let rows = QueryEngine::new().grades_by_group_and_subject(&snapshot, c.alpha, c.compilers);

    let listed: Vec<_> = rows
        .iter()
        .map(|r| (r.full_name.as_str(), r.grade, r.date_received))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("Ada Lovelace", dec!(88), date(2024, 2, 1)),
            ("Alan Turing", dec!(75), date(2024, 2, 8)),
        ]
    );
}

#[test]
fn subjects_of_student_deduplicates_by_subject() {
    let c = campus();
    // Two Compilers grades, one Algorithms grade: two distinct subjects.
    c.store
        .record_grade(c.ada, c.compilers, dec!(80), Some(date(2024, 1, 10)))
        .unwrap();
    c.store
        .record_grade(c.ada, c.compilers, dec!(90), Some(date(2024, 1, 17)))
        .unwrap();
    c.store
        .record_grade(c.ada, c.algorithms, dec!(85), Some(date(2024, 1, 11)))
        .unwrap();

    let snapshot = c.store.snapshot().unwrap();
    let names: Vec<_> = QueryEngine::new()
        .subjects_of_student(&snapshot, c.ada)
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, vec!["Compilers", "Algorithms"]);
}

#[test]
fn subjects_of_student_by_teacher_intersects_enrollment_and_authorship() {
    let c = campus();
    c.store
        .record_grade(c.ada, c.compilers, dec!(80), Some(date(2024, 1, 10)))
        .unwrap();
    c.store
        .record_grade(c.ada, c.algorithms, dec!(85), Some(date(2024, 1, 11)))
        .unwrap();

    let snapshot = c.store.snapshot().unwrap();
    let engine = QueryEngine::new();

    let from_hopper: Vec<_> = engine
        .subjects_of_student_by_teacher(&snapshot, c.ada, c.hopper)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(from_hopper, vec!["Compilers"]);

    // Alan is enrolled in nothing, so the intersection is empty either way.
    assert!(engine
        .subjects_of_student_by_teacher(&snapshot, c.alan, c.hopper)
        .is_empty());
}

use crate::store::Catalog;
use core_types::{
    Grade, Group, GroupId, Student, StudentId, Subject, SubjectId, Teacher, TeacherId,
};
use std::sync::RwLockReadGuard;

/// A consistent, read-only view of the catalog.
///
/// Holds the store's read lock for its lifetime, so every accessor below
/// observes one fixed state of the entity graph. All iterators yield records
/// in ascending id order.
pub struct Snapshot<'a> {
    catalog: RwLockReadGuard<'a, Catalog>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(catalog: RwLockReadGuard<'a, Catalog>) -> Self {
        Self { catalog }
    }

    // --- Typed accessors by id ---

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.catalog.groups.get(&id)
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.catalog.teachers.get(&id)
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.catalog.students.get(&id)
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.catalog.subjects.get(&id)
    }

    // --- Full scans ---

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.catalog.groups.values()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> {
        self.catalog.teachers.values()
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.catalog.students.values()
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.catalog.subjects.values()
    }

    pub fn grades(&self) -> impl Iterator<Item = &Grade> {
        self.catalog.grades.values()
    }

    // --- Relationship traversals ---

    /// Student → Group.
    pub fn group_of(&self, student: &Student) -> Option<&Group> {
        self.group(student.group_id)
    }

    /// Subject → Teacher.
    pub fn teacher_of(&self, subject: &Subject) -> Option<&Teacher> {
        self.teacher(subject.teacher_id)
    }

    /// Grade → Student.
    pub fn student_of(&self, grade: &Grade) -> Option<&Student> {
        self.student(grade.student_id)
    }

    /// Grade → Subject.
    pub fn subject_of(&self, grade: &Grade) -> Option<&Subject> {
        self.subject(grade.subject_id)
    }

    /// Group → Students.
    pub fn students_of_group(&self, group_id: GroupId) -> impl Iterator<Item = &Student> {
        self.students().filter(move |s| s.group_id == group_id)
    }

    /// Teacher → Subjects.
    pub fn subjects_of_teacher(&self, teacher_id: TeacherId) -> impl Iterator<Item = &Subject> {
        self.subjects().filter(move |s| s.teacher_id == teacher_id)
    }

    /// Student → Grades.
    pub fn grades_of_student(&self, student_id: StudentId) -> impl Iterator<Item = &Grade> {
        self.grades().filter(move |g| g.student_id == student_id)
    }

    /// Subject → Grades.
    pub fn grades_of_subject(&self, subject_id: SubjectId) -> impl Iterator<Item = &Grade> {
        self.grades().filter(move |g| g.subject_id == subject_id)
    }
}

use crate::results::{GradeRow, GroupAverage, StudentAverage};
use core_types::{Grade, GroupId, Student, StudentId, Subject, SubjectId, TeacherId};
use datastore::Snapshot;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// A stateless executor for the gradebook's analytical operations.
///
/// Every method is a pure function of a [`Snapshot`] and its parameters; the
/// snapshot guarantees all phases of one operation observe the same state.
#[derive(Debug, Default)]
pub struct QueryEngine {}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The students with the highest mean grade across all subjects, best
    /// first, at most `limit` of them.
    ///
    /// Students with no grades have no average and are excluded. Ties are
    /// broken by student id: the tally is accumulated in id order and the
    /// ranking sort is stable.
    pub fn top_students_overall(
        &self,
        snapshot: &Snapshot<'_>,
        limit: usize,
    ) -> Vec<StudentAverage> {
        let mut rows = student_averages(snapshot, snapshot.grades());
        rows.sort_by(|a, b| b.average.cmp(&a.average));
        rows.truncate(limit);
        trace!(limit, returned = rows.len(), "ranked students overall");
        rows
    }

    /// The single student with the highest mean grade in one subject, or
    /// `None` if the subject has no grades at all.
    pub fn top_student_by_subject(
        &self,
        snapshot: &Snapshot<'_>,
        subject_id: SubjectId,
    ) -> Option<StudentAverage> {
        let mut rows = student_averages(snapshot, snapshot.grades_of_subject(subject_id));
        rows.sort_by(|a, b| b.average.cmp(&a.average));
        rows.into_iter().next()
    }

    /// Each group's mean grade in one subject. Groups with no matching grades
    /// produce no row.
    pub fn group_averages_by_subject(
        &self,
        snapshot: &Snapshot<'_>,
        subject_id: SubjectId,
    ) -> Vec<GroupAverage> {
        let mut tallies: BTreeMap<GroupId, Tally> = BTreeMap::new();
        for grade in snapshot.grades_of_subject(subject_id) {
            if let Some(student) = snapshot.student_of(grade) {
                tallies.entry(student.group_id).or_default().add(grade.value);
            }
        }
        tallies
            .into_iter()
            .filter_map(|(group_id, tally)| {
                let group = snapshot.group(group_id)?;
                Some(GroupAverage {
                    group_name: group.name.clone(),
                    average: tally.mean()?,
                })
            })
            .collect()
    }

    /// The mean grade over every grade in the store, or `None` if there are
    /// no grades at all.
    pub fn overall_average(&self, snapshot: &Snapshot<'_>) -> Option<Decimal> {
        let mut tally = Tally::default();
        for grade in snapshot.grades() {
            tally.add(grade.value);
        }
        tally.mean()
    }

    /// Every subject taught by the given teacher.
    pub fn subjects_by_teacher(
        &self,
        snapshot: &Snapshot<'_>,
        teacher_id: TeacherId,
    ) -> Vec<Subject> {
        snapshot.subjects_of_teacher(teacher_id).cloned().collect()
    }

    /// Every student belonging to the given group.
    pub fn students_by_group(&self, snapshot: &Snapshot<'_>, group_id: GroupId) -> Vec<Student> {
        snapshot.students_of_group(group_id).cloned().collect()
    }

    /// Every grade received in one subject by students of one group.
    pub fn grades_by_group_and_subject(
        &self,
        snapshot: &Snapshot<'_>,
        group_id: GroupId,
        subject_id: SubjectId,
    ) -> Vec<GradeRow> {
        group_subject_grades(snapshot, group_id, subject_id)
            .map(|(student, grade)| grade_row(student, grade))
            .collect()
    }

    /// The mean grade the given teacher has recorded, across all their
    /// subjects, or `None` if they have recorded none.
    pub fn teacher_average(
        &self,
        snapshot: &Snapshot<'_>,
        teacher_id: TeacherId,
    ) -> Option<Decimal> {
        let mut tally = Tally::default();
        for subject in snapshot.subjects_of_teacher(teacher_id) {
            for grade in snapshot.grades_of_subject(subject.id) {
                tally.add(grade.value);
            }
        }
        tally.mean()
    }

    /// The distinct subjects in which the given student has at least one
    /// grade, deduplicated by subject id.
    pub fn subjects_of_student(
        &self,
        snapshot: &Snapshot<'_>,
        student_id: StudentId,
    ) -> Vec<Subject> {
        let ids: BTreeSet<SubjectId> = snapshot
            .grades_of_student(student_id)
            .map(|g| g.subject_id)
            .collect();
        ids.into_iter()
            .filter_map(|id| snapshot.subject(id).cloned())
            .collect()
    }

    /// The distinct subjects the given teacher teaches in which the given
    /// student has at least one grade.
    pub fn subjects_of_student_by_teacher(
        &self,
        snapshot: &Snapshot<'_>,
        student_id: StudentId,
        teacher_id: TeacherId,
    ) -> Vec<Subject> {
        self.subjects_of_student(snapshot, student_id)
            .into_iter()
            .filter(|s| s.teacher_id == teacher_id)
            .collect()
    }

    /// The mean grade the given teacher has given the given student, across
    /// that teacher's subjects only, or `None` if there is none.
    pub fn teacher_average_for_student(
        &self,
        snapshot: &Snapshot<'_>,
        student_id: StudentId,
        teacher_id: TeacherId,
    ) -> Option<Decimal> {
        let mut tally = Tally::default();
        for grade in snapshot.grades_of_student(student_id) {
            let taught_by = snapshot.subject_of(grade).map(|s| s.teacher_id);
            if taught_by == Some(teacher_id) {
                tally.add(grade.value);
            }
        }
        tally.mean()
    }

    /// The grades of one group in one subject from the most recent session.
    ///
    /// Two phases over the same snapshot: first the maximum `date_received`
    /// among the matching grades, then every matching grade carrying exactly
    /// that date. Multiple grades on the maximum date are all returned; no
    /// matches at all yields an empty vector.
    pub fn last_session_grades(
        &self,
        snapshot: &Snapshot<'_>,
        group_id: GroupId,
        subject_id: SubjectId,
    ) -> Vec<GradeRow> {
        let latest = group_subject_grades(snapshot, group_id, subject_id)
            .map(|(_, grade)| grade.date_received)
            .max();
        let Some(latest) = latest else {
            return Vec::new();
        };
        trace!(%group_id, %subject_id, %latest, "resolved last session date");
        group_subject_grades(snapshot, group_id, subject_id)
            .filter(|(_, grade)| grade.date_received == latest)
            .map(|(student, grade)| grade_row(student, grade))
            .collect()
    }
}

/// A running sum and count for one mean. `mean` is `None` for an empty tally;
/// an undefined average must never collapse to zero.
#[derive(Debug, Default)]
struct Tally {
    sum: Decimal,
    count: u32,
}

impl Tally {
    fn add(&mut self, value: Decimal) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / Decimal::from(self.count))
    }
}

/// Per-student mean over an arbitrary set of grades, one row per student that
/// appears in the set, in ascending student-id order.
fn student_averages<'s>(
    snapshot: &Snapshot<'_>,
    grades: impl Iterator<Item = &'s Grade>,
) -> Vec<StudentAverage> {
    let mut tallies: BTreeMap<StudentId, Tally> = BTreeMap::new();
    for grade in grades {
        tallies.entry(grade.student_id).or_default().add(grade.value);
    }
    tallies
        .into_iter()
        .filter_map(|(student_id, tally)| {
            let student = snapshot.student(student_id)?.clone();
            Some(StudentAverage {
                student,
                average: tally.mean()?,
            })
        })
        .collect()
}

/// The join behind operations 7 and 12: grades in `subject_id` whose student
/// belongs to `group_id`, in ascending grade-id order.
fn group_subject_grades<'s>(
    snapshot: &'s Snapshot<'_>,
    group_id: GroupId,
    subject_id: SubjectId,
) -> impl Iterator<Item = (&'s Student, &'s Grade)> {
    snapshot.grades_of_subject(subject_id).filter_map(move |grade| {
        let student = snapshot.student_of(grade)?;
        (student.group_id == group_id).then_some((student, grade))
    })
}

fn grade_row(student: &Student, grade: &Grade) -> GradeRow {
    GradeRow {
        full_name: student.full_name(),
        grade: grade.value,
        date_received: grade.date_received,
    }
}

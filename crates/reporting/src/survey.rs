use crate::error::ReportError;
use crate::writer::ReportWriter;
use core_types::{GroupId, StudentId, SubjectId, TeacherId};
use datastore::Datastore;
use queries::QueryEngine;
use std::io::Write;
use tracing::debug;

/// The identifiers the parameterized survey sections are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct SurveyParams {
    pub subject_id: SubjectId,
    pub teacher_id: TeacherId,
    pub student_id: StudentId,
    pub group_id: GroupId,
}

/// Runs all 12 analytical operations over a single snapshot of `store` and
/// writes the numbered report sections to `out`.
///
/// This is the point where storage unavailability surfaces: if a snapshot
/// cannot be established the survey fails as a whole. Within the survey,
/// empty results are rendered as empty sections or `no data`, never errors.
pub fn write_survey<W: Write>(
    store: &Datastore,
    params: &SurveyParams,
    out: W,
) -> Result<(), ReportError> {
    let snapshot = store.snapshot()?;
    let engine = QueryEngine::new();
    let mut writer = ReportWriter::new(out);
    debug!(?params, "writing academic survey");

    writer.heading("1. Top students overall:")?;
    writer.student_averages(&engine.top_students_overall(&snapshot, 5))?;

    writer.heading("2. Top student in subject:")?;
    writer.top_student(engine.top_student_by_subject(&snapshot, params.subject_id).as_ref())?;

    writer.heading("3. Group averages in subject:")?;
    writer.group_averages(&engine.group_averages_by_subject(&snapshot, params.subject_id))?;

    writer.heading("4. Overall average:")?;
    writer.aggregate(engine.overall_average(&snapshot))?;

    writer.heading("5. Subjects taught by teacher:")?;
    writer.subjects(&engine.subjects_by_teacher(&snapshot, params.teacher_id))?;

    writer.heading("6. Students in group:")?;
    writer.students(&engine.students_by_group(&snapshot, params.group_id))?;

    writer.heading("7. Grades in group for subject:")?;
    writer.grade_rows(&engine.grades_by_group_and_subject(
        &snapshot,
        params.group_id,
        params.subject_id,
    ))?;

    writer.heading("8. Teacher's average grade:")?;
    writer.aggregate(engine.teacher_average(&snapshot, params.teacher_id))?;

    writer.heading("9. Subjects attended by student:")?;
    writer.subjects(&engine.subjects_of_student(&snapshot, params.student_id))?;

    writer.heading("10. Subjects from teacher to student:")?;
    writer.subjects(&engine.subjects_of_student_by_teacher(
        &snapshot,
        params.student_id,
        params.teacher_id,
    ))?;

    writer.heading("11. Teacher's average for student:")?;
    writer.aggregate(engine.teacher_average_for_student(
        &snapshot,
        params.student_id,
        params.teacher_id,
    ))?;

    writer.heading("12. Last session grades:")?;
    writer.grade_rows(&engine.last_session_grades(
        &snapshot,
        params.group_id,
        params.subject_id,
    ))?;

    Ok(())
}

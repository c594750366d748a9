use chrono::NaiveDate;
use core_types::{GroupId, StudentId, SubjectId, TeacherId};
use datastore::Datastore;
use reporting::{write_survey, SurveyParams};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn survey_renders_all_twelve_sections() {
    let store = Datastore::new();
    let group = store.add_group("CS-101").unwrap();
    let teacher = store
        .add_teacher("Grace", "Hopper", "grace@uni.edu", None)
        .unwrap();
    let subject = store.add_subject("Compilers", teacher).unwrap();
    let student = store
        .add_student("Ada", "Lovelace", "ada@uni.edu", None, group)
        .unwrap();
    store
        .record_grade(student, subject, dec!(80), Some(date(2024, 1, 10)))
        .unwrap();
    store
        .record_grade(student, subject, dec!(90), Some(date(2024, 1, 17)))
        .unwrap();

    let params = SurveyParams {
        subject_id: subject,
        teacher_id: teacher,
        student_id: student,
        group_id: group,
    };
    let mut buffer = Vec::new();
    write_survey(&store, &params, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    for heading in [
        "1. Top students overall:",
        "2. Top student in subject:",
        "3. Group averages in subject:",
        "4. Overall average:",
        "5. Subjects taught by teacher:",
        "6. Students in group:",
        "7. Grades in group for subject:",
        "8. Teacher's average grade:",
        "9. Subjects attended by student:",
        "10. Subjects from teacher to student:",
        "11. Teacher's average for student:",
        "12. Last session grades:",
    ] {
        assert!(text.contains(heading), "missing section: {heading}");
    }

    // Averages carry exactly two decimals.
    assert!(text.contains("  Ada Lovelace: 85.00\n"));
    assert!(text.contains("  85.00\n"));
    // The last session is January 17 only.
    let last_session = text.split("12. Last session grades:").nth(1).unwrap();
    assert!(last_session.contains("  Ada Lovelace: 90 (2024-01-17)\n"));
    assert!(!last_session.contains("2024-01-10"));
}

#[test]
fn survey_over_empty_store_says_no_data_never_zero() {
    let store = Datastore::new();
    let params = SurveyParams {
        subject_id: SubjectId(1),
        teacher_id: TeacherId(1),
        student_id: StudentId(1),
        group_id: GroupId(1),
    };
    let mut buffer = Vec::new();
    write_survey(&store, &params, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    // The four scalar aggregates (sections 2, 4, 8, 11) all report no data.
    assert_eq!(text.matches("  no data\n").count(), 4);
    assert!(!text.contains("0.00"));
}

use crate::error::DatastoreError;
use crate::snapshot::Snapshot;
use chrono::{NaiveDate, Utc};
use core_types::{
    Grade, GradeId, Group, GroupId, Student, StudentId, Subject, SubjectId, Teacher, TeacherId,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use tracing::debug;

/// The raw record catalog. Ordered maps keyed by id, so iteration order is
/// id order, which is insertion order.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    pub(crate) groups: BTreeMap<GroupId, Group>,
    pub(crate) teachers: BTreeMap<TeacherId, Teacher>,
    pub(crate) students: BTreeMap<StudentId, Student>,
    pub(crate) subjects: BTreeMap<SubjectId, Subject>,
    pub(crate) grades: BTreeMap<GradeId, Grade>,
    next_group: u32,
    next_teacher: u32,
    next_student: u32,
    next_subject: u32,
    next_grade: u32,
}

/// The shared, in-memory store of academic records.
///
/// Cloning a `Datastore` is cheap and yields a handle to the same underlying
/// catalog. All mutation goes through the methods here, which enforce the
/// schema invariants; all reading goes through [`Datastore::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct Datastore {
    inner: Arc<RwLock<Catalog>>,
}

impl Datastore {
    /// Creates a new, empty `Datastore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a consistent read-only view of the catalog.
    ///
    /// The snapshot holds a read lock for its lifetime: every accessor called
    /// through it observes the same state, even across the two phases of the
    /// "last session" query. Writers block until the snapshot is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Unavailable`] if the store lock has been
    /// poisoned by a panicking writer.
    pub fn snapshot(&self) -> Result<Snapshot<'_>, DatastoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|e| DatastoreError::Unavailable(e.to_string()))?;
        Ok(Snapshot::new(guard))
    }

    /// Registers a new group. Group names are unique.
    pub fn add_group(&self, name: &str) -> Result<GroupId, DatastoreError> {
        let mut catalog = self.write()?;
        if catalog.groups.values().any(|g| g.name == name) {
            return Err(DatastoreError::DuplicateName("group", name.to_string()));
        }
        catalog.next_group += 1;
        let id = GroupId(catalog.next_group);
        catalog.groups.insert(
            id,
            Group {
                id,
                name: name.to_string(),
            },
        );
        debug!(%id, name, "registered group");
        Ok(id)
    }

    /// Registers a new teacher. Teacher emails are unique.
    pub fn add_teacher(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<TeacherId, DatastoreError> {
        let mut catalog = self.write()?;
        if catalog.teachers.values().any(|t| t.email == email) {
            return Err(DatastoreError::DuplicateEmail("teacher", email.to_string()));
        }
        catalog.next_teacher += 1;
        let id = TeacherId(catalog.next_teacher);
        catalog.teachers.insert(
            id,
            Teacher {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: phone.map(str::to_string),
            },
        );
        debug!(%id, email, "registered teacher");
        Ok(id)
    }

    /// Registers a new student in an existing group. Student emails are unique.
    pub fn add_student(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
        group_id: GroupId,
    ) -> Result<StudentId, DatastoreError> {
        let mut catalog = self.write()?;
        if !catalog.groups.contains_key(&group_id) {
            return Err(DatastoreError::UnknownGroup(group_id));
        }
        if catalog.students.values().any(|s| s.email == email) {
            return Err(DatastoreError::DuplicateEmail("student", email.to_string()));
        }
        catalog.next_student += 1;
        let id = StudentId(catalog.next_student);
        catalog.students.insert(
            id,
            Student {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: phone.map(str::to_string),
                group_id,
            },
        );
        debug!(%id, email, %group_id, "registered student");
        Ok(id)
    }

    /// Registers a new subject taught by an existing teacher. Subject names
    /// are unique.
    pub fn add_subject(
        &self,
        name: &str,
        teacher_id: TeacherId,
    ) -> Result<SubjectId, DatastoreError> {
        let mut catalog = self.write()?;
        if !catalog.teachers.contains_key(&teacher_id) {
            return Err(DatastoreError::UnknownTeacher(teacher_id));
        }
        if catalog.subjects.values().any(|s| s.name == name) {
            return Err(DatastoreError::DuplicateName("subject", name.to_string()));
        }
        catalog.next_subject += 1;
        let id = SubjectId(catalog.next_subject);
        catalog.subjects.insert(
            id,
            Subject {
                id,
                name: name.to_string(),
                teacher_id,
            },
        );
        debug!(%id, name, %teacher_id, "registered subject");
        Ok(id)
    }

    /// Records a grade for an existing student in an existing subject.
    ///
    /// `date_received` defaults to today when `None`.
    pub fn record_grade(
        &self,
        student_id: StudentId,
        subject_id: SubjectId,
        value: Decimal,
        date_received: Option<NaiveDate>,
    ) -> Result<GradeId, DatastoreError> {
        let mut catalog = self.write()?;
        if !catalog.students.contains_key(&student_id) {
            return Err(DatastoreError::UnknownStudent(student_id));
        }
        if !catalog.subjects.contains_key(&subject_id) {
            return Err(DatastoreError::UnknownSubject(subject_id));
        }
        catalog.next_grade += 1;
        let id = GradeId(catalog.next_grade);
        let date_received = date_received.unwrap_or_else(|| Utc::now().date_naive());
        catalog.grades.insert(
            id,
            Grade {
                id,
                student_id,
                subject_id,
                value,
                date_received,
            },
        );
        debug!(%id, %student_id, %subject_id, %value, "recorded grade");
        Ok(id)
    }

    /// Removes a student and, by cascade, every grade that belongs to them.
    pub fn remove_student(&self, student_id: StudentId) -> Result<(), DatastoreError> {
        let mut catalog = self.write()?;
        if catalog.students.remove(&student_id).is_none() {
            return Err(DatastoreError::UnknownStudent(student_id));
        }
        catalog.grades.retain(|_, g| g.student_id != student_id);
        debug!(%student_id, "removed student and cascaded grades");
        Ok(())
    }

    /// Removes a subject and, by cascade, every grade recorded in it.
    ///
    /// There is no removal for groups or teachers: their dependents are not
    /// owned and would have to be re-parented first.
    pub fn remove_subject(&self, subject_id: SubjectId) -> Result<(), DatastoreError> {
        let mut catalog = self.write()?;
        if catalog.subjects.remove(&subject_id).is_none() {
            return Err(DatastoreError::UnknownSubject(subject_id));
        }
        catalog.grades.retain(|_, g| g.subject_id != subject_id);
        debug!(%subject_id, "removed subject and cascaded grades");
        Ok(())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, DatastoreError> {
        self.inner
            .write()
            .map_err(|e| DatastoreError::Unavailable(e.to_string()))
    }
}

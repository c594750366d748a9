use crate::error::ReportError;
use core_types::{Student, Subject};
use queries::{GradeRow, GroupAverage, StudentAverage};
use rust_decimal::Decimal;
use std::io::Write;

/// Renders typed query results to a line-oriented sink.
///
/// Every row becomes one indented line under the most recent heading.
/// Averages always render with two decimals; `Decimal` honors the format
/// precision, so `85` becomes `85.00` with no float rounding surprises.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a section heading on its own line.
    pub fn heading(&mut self, title: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{title}")?;
        Ok(())
    }

    /// One line per ranked student: `name: average`.
    pub fn student_averages(&mut self, rows: &[StudentAverage]) -> Result<(), ReportError> {
        for row in rows {
            writeln!(self.out, "  {}: {:.2}", row.student.full_name(), row.average)?;
        }
        Ok(())
    }

    /// A single ranked student, or `no data` if the aggregate was empty.
    pub fn top_student(&mut self, row: Option<&StudentAverage>) -> Result<(), ReportError> {
        match row {
            Some(row) => {
                writeln!(self.out, "  {}: {:.2}", row.student.full_name(), row.average)?
            }
            None => self.no_data()?,
        }
        Ok(())
    }

    /// One line per group: `name: average`.
    pub fn group_averages(&mut self, rows: &[GroupAverage]) -> Result<(), ReportError> {
        for row in rows {
            writeln!(self.out, "  {}: {:.2}", row.group_name, row.average)?;
        }
        Ok(())
    }

    /// A scalar average, or `no data` if undefined.
    pub fn aggregate(&mut self, value: Option<Decimal>) -> Result<(), ReportError> {
        match value {
            Some(value) => writeln!(self.out, "  {value:.2}")?,
            None => self.no_data()?,
        }
        Ok(())
    }

    /// One line per subject: its name.
    pub fn subjects(&mut self, rows: &[Subject]) -> Result<(), ReportError> {
        for subject in rows {
            writeln!(self.out, "  {}", subject.name)?;
        }
        Ok(())
    }

    /// One line per student: their full name.
    pub fn students(&mut self, rows: &[Student]) -> Result<(), ReportError> {
        for student in rows {
            writeln!(self.out, "  {}", student.full_name())?;
        }
        Ok(())
    }

    /// One line per grade: `name: score (date)`. Scores print as recorded,
    /// not rounded.
    pub fn grade_rows(&mut self, rows: &[GradeRow]) -> Result<(), ReportError> {
        for row in rows {
            writeln!(
                self.out,
                "  {}: {} ({})",
                row.full_name, row.grade, row.date_received
            )?;
        }
        Ok(())
    }

    fn no_data(&mut self) -> Result<(), ReportError> {
        writeln!(self.out, "  no data")?;
        Ok(())
    }
}

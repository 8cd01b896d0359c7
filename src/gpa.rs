//! GPA engine.
//!
//! Holds the ordered course list and computes the credit-weighted average.
//! The list only grows: courses are appended and edited in place, never
//! removed or reordered.

use thiserror::Error;

use crate::grades::{self, DEFAULT_GRADE_POINT};

/// One course row: credit hours and the resolved grade point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseEntry {
    pub credit_hours: f64,
    pub grade_point: f64,
}

impl Default for CourseEntry {
    fn default() -> Self {
        Self {
            credit_hours: 0.0,
            grade_point: DEFAULT_GRADE_POINT,
        }
    }
}

/// Editable field of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    CreditHours,
    GradePoint,
}

impl CourseField {
    /// The other field (for Tab navigation)
    pub fn toggle(self) -> Self {
        match self {
            CourseField::CreditHours => CourseField::GradePoint,
            CourseField::GradePoint => CourseField::CreditHours,
        }
    }
}

/// Rejected course updates. The list is left untouched in every case.
#[derive(Debug, Error, PartialEq)]
pub enum CourseError {
    #[error("course index {index} out of range (list has {len} courses)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("credit hours must be a non-negative number, got {0}")]
    InvalidCreditHours(f64),
    #[error("grade point {0} is not in the grade table")]
    UnknownGradePoint(f64),
}

/// Ordered, append-only list of courses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseList {
    entries: Vec<CourseEntry>,
}

impl CourseList {
    /// List pre-filled with `count` default courses
    pub fn with_defaults(count: usize) -> Self {
        Self {
            entries: vec![CourseEntry::default(); count],
        }
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CourseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append a default course (0 credits, 4.0) and return its index
    pub fn add_course(&mut self) -> usize {
        self.entries.push(CourseEntry::default());
        self.entries.len() - 1
    }

    /// Set one field of one course
    pub fn update_course(
        &mut self,
        index: usize,
        field: CourseField,
        value: f64,
    ) -> Result<(), CourseError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CourseError::IndexOutOfRange { index, len })?;

        match field {
            CourseField::CreditHours => {
                if !value.is_finite() || value < 0.0 {
                    return Err(CourseError::InvalidCreditHours(value));
                }
                entry.credit_hours = value;
            }
            CourseField::GradePoint => {
                if !grades::is_known_point(value) {
                    return Err(CourseError::UnknownGradePoint(value));
                }
                entry.grade_point = value;
            }
        }
        Ok(())
    }

    /// Weighted GPA of the whole list
    pub fn gpa(&self) -> f64 {
        compute(&self.entries)
    }
}

/// Credit-weighted average grade point, rounded to two decimals.
///
/// Returns 0 when there are no credits to divide by.
pub fn compute(courses: &[CourseEntry]) -> f64 {
    let total_credits: f64 = courses.iter().map(|c| c.credit_hours).sum();
    if total_credits <= 0.0 {
        return 0.0;
    }

    let total_points: f64 = courses.iter().map(|c| c.credit_hours * c.grade_point).sum();
    let gpa = round2(total_points / total_credits);
    if gpa.is_finite() {
        gpa
    } else {
        0.0
    }
}

/// Display string for a GPA value
pub fn format_gpa(gpa: f64) -> String {
    format!("GPA: {:.2}", gpa)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

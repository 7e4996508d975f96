//! Module record model

use super::grade::GradeEntry;
use serde::{Deserialize, Serialize};

/// One course taken in one semester: a single row of user input.
///
/// `credit_point` is derived from `credit` and `grade` and is recomputed by
/// the setters; it is not independently settable truth. Field names
/// serialize in camelCase so persisted data stays compatible with earlier
/// releases of the tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleRecord {
    /// Module name (e.g., "Data Structures"); may be empty while incomplete
    pub module_name: String,

    /// Module code (e.g., "CS2510"); may be empty while incomplete
    pub module_code: String,

    /// Credit-hours weight; 0 means "not yet set"
    credit: f64,

    /// Letter grade entry (may be unset or unrecognized)
    grade: GradeEntry,

    /// Derived: `credit * grade.points()`
    credit_point: f64,
}

impl ModuleRecord {
    /// Create a new record, computing the credit point from credit and grade.
    ///
    /// # Arguments
    /// * `module_name` - Module name (may be empty)
    /// * `module_code` - Module code (may be empty)
    /// * `credit` - Credit-hours weight; negative input is clamped to 0
    /// * `grade` - Grade entry
    #[must_use]
    pub fn new(
        module_name: String,
        module_code: String,
        credit: f64,
        grade: GradeEntry,
    ) -> Self {
        let credit = credit.max(0.0);
        let credit_point = credit * grade.points();
        Self {
            module_name,
            module_code,
            credit,
            grade,
            credit_point,
        }
    }

    /// Reconstruct a record from decoded fields, keeping the credit point
    /// that was read from the file rather than recomputing it.
    ///
    /// Import files carry a credit point rounded to two decimal places; the
    /// next edit through [`set_credit`] or [`set_grade`] snaps the field back
    /// to the derived value.
    ///
    /// [`set_credit`]: Self::set_credit
    /// [`set_grade`]: Self::set_grade
    #[must_use]
    pub const fn from_decoded(
        module_name: String,
        module_code: String,
        credit: f64,
        grade: GradeEntry,
        credit_point: f64,
    ) -> Self {
        Self {
            module_name,
            module_code,
            credit,
            grade,
            credit_point,
        }
    }

    /// Get the credit-hours weight.
    #[must_use]
    pub const fn credit(&self) -> f64 {
        self.credit
    }

    /// Get the grade entry.
    #[must_use]
    pub const fn grade(&self) -> &GradeEntry {
        &self.grade
    }

    /// Get the derived credit point.
    #[must_use]
    pub const fn credit_point(&self) -> f64 {
        self.credit_point
    }

    /// Set the credit weight and recompute the credit point.
    /// Negative input is clamped to 0.
    pub fn set_credit(&mut self, credit: f64) {
        self.credit = credit.max(0.0);
        self.recompute();
    }

    /// Set the grade and recompute the credit point.
    pub fn set_grade(&mut self, grade: GradeEntry) {
        self.grade = grade;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.credit_point = self.credit * self.grade.points();
    }

    /// Whether this record counts toward averages.
    ///
    /// A record is complete iff name and code are non-empty, credit is
    /// positive, and the grade is a recognized symbol on the scale. An
    /// unrecognized grade keeps the record out of the averages without
    /// raising an error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.module_name.is_empty()
            && !self.module_code.is_empty()
            && self.credit > 0.0
            && self.grade.is_known()
    }

    /// Whether this record is a blank placeholder row (nothing entered).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.module_name.is_empty()
            && self.module_code.is_empty()
            && self.credit <= 0.0
            && !self.grade.is_set()
    }
}

//! Program model: the fixed set of eight semesters

use super::module::ModuleRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of semester slots in a program. Slots always exist, even if empty.
pub const SEMESTER_COUNT: usize = 8;

/// Serialized shape: a map from `semester-1`..`semester-8` to module lists.
type SemesterMap = BTreeMap<String, Vec<ModuleRecord>>;

/// The full dataset: eight semesters of module records.
///
/// The program is the sole owner of all record data; the codec and the
/// persistence store only ever consume and produce snapshots of it.
/// Invariants: exactly [`SEMESTER_COUNT`] slots, each holding at least one
/// row (a blank placeholder when nothing has been entered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SemesterMap", into = "SemesterMap")]
pub struct Program {
    semesters: Vec<Vec<ModuleRecord>>,
}

impl Program {
    /// Create the initial state: eight semesters, one blank row each.
    #[must_use]
    pub fn new() -> Self {
        Self {
            semesters: (0..SEMESTER_COUNT)
                .map(|_| vec![ModuleRecord::default()])
                .collect(),
        }
    }

    /// Get the storage key for a semester number (e.g., `semester-3`).
    ///
    /// # Arguments
    /// * `number` - Semester number, 1-based
    #[must_use]
    pub fn semester_key(number: usize) -> String {
        format!("semester-{number}")
    }

    /// Parse a storage key back to a semester number.
    ///
    /// # Returns
    /// The 1-based semester number, or `None` when the key does not name one
    /// of the eight known slots.
    #[must_use]
    pub fn parse_semester_key(key: &str) -> Option<usize> {
        let number = key.strip_prefix("semester-")?.parse::<usize>().ok()?;
        (1..=SEMESTER_COUNT).contains(&number).then_some(number)
    }

    /// Get a semester's module list by 1-based number.
    #[must_use]
    pub fn semester(&self, number: usize) -> Option<&[ModuleRecord]> {
        self.semesters.get(number.checked_sub(1)?).map(Vec::as_slice)
    }

    /// Get a mutable reference to one module record.
    ///
    /// # Arguments
    /// * `number` - Semester number, 1-based
    /// * `row` - Row index within the semester, 0-based
    pub fn module_mut(&mut self, number: usize, row: usize) -> Option<&mut ModuleRecord> {
        self.semesters
            .get_mut(number.checked_sub(1)?)?
            .get_mut(row)
    }

    /// Append a module record to a semester.
    ///
    /// # Errors
    /// Returns an error if the semester number is out of range.
    pub fn add_module(&mut self, number: usize, record: ModuleRecord) -> Result<(), String> {
        let semester = self
            .semesters
            .get_mut(number.wrapping_sub(1))
            .ok_or_else(|| format!("Semester {number} is out of range (1-{SEMESTER_COUNT})"))?;
        semester.push(record);
        Ok(())
    }

    /// Remove a module record from a semester.
    ///
    /// A semester emptied by removal is refilled with a single blank row so
    /// every slot always holds at least one row.
    ///
    /// # Errors
    /// Returns an error if the semester number or row index is out of range.
    pub fn remove_module(&mut self, number: usize, row: usize) -> Result<(), String> {
        let semester = self
            .semesters
            .get_mut(number.wrapping_sub(1))
            .ok_or_else(|| format!("Semester {number} is out of range (1-{SEMESTER_COUNT})"))?;

        if row >= semester.len() {
            return Err(format!(
                "Row {row} is out of range for semester {number} ({} rows)",
                semester.len()
            ));
        }

        semester.remove(row);
        if semester.is_empty() {
            semester.push(ModuleRecord::default());
        }
        Ok(())
    }

    /// Reset one semester back to a single blank row, leaving the others
    /// untouched.
    ///
    /// # Errors
    /// Returns an error if the semester number is out of range.
    pub fn reset_semester(&mut self, number: usize) -> Result<(), String> {
        let semester = self
            .semesters
            .get_mut(number.wrapping_sub(1))
            .ok_or_else(|| format!("Semester {number} is out of range (1-{SEMESTER_COUNT})"))?;
        *semester = vec![ModuleRecord::default()];
        Ok(())
    }

    /// Reset all semesters back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether every record in every semester is a blank placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters
            .iter()
            .all(|semester| semester.iter().all(ModuleRecord::is_blank))
    }

    /// Iterate semesters in fixed order as `(number, records)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ModuleRecord])> + '_ {
        self.semesters
            .iter()
            .enumerate()
            .map(|(idx, records)| (idx + 1, records.as_slice()))
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Program> for SemesterMap {
    fn from(program: Program) -> Self {
        program
            .semesters
            .into_iter()
            .enumerate()
            .map(|(idx, records)| (Program::semester_key(idx + 1), records))
            .collect()
    }
}

impl From<SemesterMap> for Program {
    fn from(map: SemesterMap) -> Self {
        let mut program = Self {
            semesters: (0..SEMESTER_COUNT).map(|_| Vec::new()).collect(),
        };

        // Unknown keys are dropped; known slots keep their stored rows.
        for (key, records) in map {
            if let Some(number) = Self::parse_semester_key(&key) {
                program.semesters[number - 1] = records;
            }
        }

        // Backfill so every slot satisfies the at-least-one-row invariant.
        for semester in &mut program.semesters {
            if semester.is_empty() {
                semester.push(ModuleRecord::default());
            }
        }

        program
    }
}

//! Data models for `gradepoint`

pub mod grade;
pub mod module;
pub mod program;

pub use grade::{Grade, GradeEntry};
pub use module::ModuleRecord;
pub use program::{Program, SEMESTER_COUNT};

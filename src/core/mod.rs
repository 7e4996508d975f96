//! Core module for the GPA tracking library

pub mod codec;
pub mod config;
pub mod gpa;
pub mod models;
pub mod report;
pub mod store;

/// Returns the current version of the `gradepoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

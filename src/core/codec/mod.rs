//! Import/export codecs for the program dataset

pub mod csv;

pub use csv::{decode, encode, CSV_HEADER};

//! Converts a dog's calendar age into a human-equivalent age using a
//! size-dependent lookup table with linear interpolation.

pub mod age;
pub mod config;
pub mod convert;
pub mod error;
pub mod prefs;
pub mod render;
pub mod report;
pub mod table;

pub use age::{AgeResult, compute_age, compute_age_str, parse_birth_date};
pub use convert::{human_age, human_age_for};
pub use error::AgeError;
pub use report::Report;
pub use table::{AGE_TABLE, SizeCategory};

//! Core domain types for the bikeshare explorer.
//!
//! Cities, month/day filters, trip records and their optional columns, the
//! shared error type, CLI settings, and formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};

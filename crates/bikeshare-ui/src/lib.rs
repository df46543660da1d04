//! Console presentation layer for the bikeshare explorer.
//!
//! Prompts, statistics report rendering, and raw-row tables.

pub mod prompt;
pub mod report;
pub mod table_view;

pub use bikeshare_core as core;

//! Runtime orchestration layer for the bikeshare explorer.
//!
//! Runs the interactive session loop over the data and presentation layers.

pub mod pager;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;

//! Interactive session loop.
//!
//! Each iteration collects a
//! [`FilterSelection`](bikeshare_core::models::FilterSelection), loads the filtered table,
//! runs the four reports in fixed order, offers raw rows, and finally asks
//! whether to start over. Nothing carries from one iteration to the next.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use bikeshare_core::{BikeshareError, Result};
use bikeshare_data::analysis::{duration_stats, station_stats, time_stats, user_stats};
use bikeshare_data::reader::load_data;
use bikeshare_data::table::TripTable;
use bikeshare_ui::prompt::{collect_filters, Prompter};
use bikeshare_ui::report;
use bikeshare_ui::table_view::render_trip_rows;

use crate::pager::{RawDataPager, DEFAULT_PAGE_SIZE};

pub const RAW_DATA_QUESTION: &str = "Would you like to see some raw data? Enter yes or no.";
pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.";
pub const NO_MORE_ROWS: &str = "No more raw data to display.";

// ── SessionConfig ─────────────────────────────────────────────────────────────

/// Settings that stay fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the city CSV files.
    pub data_dir: PathBuf,
    /// Rows shown per "raw data" request.
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Drives the prompt → load → report → restart cycle over any reader/writer.
pub struct Session<R, W> {
    config: SessionConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run iterations until the user declines to restart.
    ///
    /// Returns how many iterations completed. Input ending mid-prompt stops
    /// the loop without error; unreadable data files are returned as errors.
    pub fn run(&mut self) -> Result<usize> {
        let mut completed = 0;
        loop {
            match self.run_once() {
                Ok(()) => completed += 1,
                Err(BikeshareError::InputClosed) => {
                    tracing::info!("input closed after {} iteration(s)", completed);
                    return Ok(completed);
                }
                Err(e) => return Err(e),
            }

            if !self.prompter.confirm(RESTART_QUESTION)? {
                break;
            }
            tracing::debug!("restarting session");
        }
        Ok(completed)
    }

    /// Hand back the output stream, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn run_once(&mut self) -> Result<()> {
        let selection = collect_filters(&mut self.prompter)?;
        let table = load_data(&self.config.data_dir, &selection)?;
        tracing::debug!("session selection: {}", selection);
        self.write_reports(&table)?;
        self.show_raw_data(&table)
    }

    fn write_reports(&mut self, table: &TripTable) -> Result<()> {
        tracing::debug!("reporting on {} trips in {}", table.len(), table.city());
        let out = self.prompter.output();

        let started = Instant::now();
        let stats = time_stats(table);
        report::write_time_stats(out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = station_stats(table);
        report::write_station_stats(out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = duration_stats(table);
        report::write_duration_stats(out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = user_stats(table);
        report::write_user_stats(out, &stats, started.elapsed())?;

        Ok(())
    }

    fn show_raw_data(&mut self, table: &TripTable) -> Result<()> {
        let mut pager = RawDataPager::new(self.config.page_size);
        while self.prompter.confirm(RAW_DATA_QUESTION)? {
            match pager.next_page(table) {
                Some(rows) => {
                    let rendered = render_trip_rows(rows, table.columns());
                    self.prompter.say(&rendered)?;
                    tracing::debug!("raw data shown up to row {}", pager.offset());
                }
                None => {
                    self.prompter.say(NO_MORE_ROWS)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

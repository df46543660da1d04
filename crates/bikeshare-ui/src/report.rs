//! Plain-text rendering of the four statistics reports.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare_core::formatting::{format_count, format_duration, format_number, percentage};
use bikeshare_core::time_utils::{month_name, weekday_name};
use bikeshare_data::analysis::{DurationStats, StationStats, TimeStats, UserStats};

use crate::prompt::separator;

pub const TIME_TITLE: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATION_TITLE: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_TITLE: &str = "Calculating Trip Duration...";
pub const USER_TITLE: &str = "Calculating User Stats...";

pub const NO_TRIPS: &str = "No trips match the selected filters.";
pub const NO_GENDER: &str = "There is no gender information available in this city.";
pub const NO_BIRTH_YEAR: &str = "There is no birth year information available in this city.";

// ── Reports ───────────────────────────────────────────────────────────────────

pub fn write_time_stats(
    out: &mut impl Write,
    stats: Option<&TimeStats>,
    elapsed: Duration,
) -> io::Result<()> {
    write_title(out, TIME_TITLE)?;
    if let Some(stats) = stats {
        writeln!(out, "The most common month:")?;
        for month in &stats.popular_months {
            writeln!(out, "  {}", month_name(*month))?;
        }
        writeln!(out, "The most common day of week:")?;
        for day in &stats.popular_weekdays {
            writeln!(out, "  {}", weekday_name(*day))?;
        }
        writeln!(out, "The most common start hour:")?;
        writeln!(out, "  {}", stats.popular_hour)?;
    } else {
        writeln!(out, "{}", NO_TRIPS)?;
    }
    write_footer(out, elapsed)
}

pub fn write_station_stats(
    out: &mut impl Write,
    stats: Option<&StationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    write_title(out, STATION_TITLE)?;
    if let Some(stats) = stats {
        writeln!(out, "The most commonly used start station:")?;
        for station in &stats.popular_start_stations {
            writeln!(out, "  {}", station)?;
        }
        writeln!(out, "The most commonly used end station:")?;
        for station in &stats.popular_end_stations {
            writeln!(out, "  {}", station)?;
        }
        let trip = &stats.popular_trip;
        writeln!(out, "The most commonly used start and end stations:")?;
        writeln!(
            out,
            "  {} -> {} ({} trips)",
            trip.start,
            trip.end,
            format_count(trip.count)
        )?;
    } else {
        writeln!(out, "{}", NO_TRIPS)?;
    }
    write_footer(out, elapsed)
}

pub fn write_duration_stats(
    out: &mut impl Write,
    stats: Option<&DurationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    write_title(out, DURATION_TITLE)?;
    if let Some(stats) = stats {
        writeln!(out, "The total travel time:")?;
        writeln!(
            out,
            "  {} seconds ({})",
            format_number(stats.total, 0),
            format_duration(stats.total)
        )?;
        writeln!(out, "The mean travel time:")?;
        writeln!(
            out,
            "  {} seconds ({})",
            format_number(stats.mean, 2),
            format_duration(stats.mean)
        )?;
        writeln!(out, "Trips counted: {}", format_count(stats.trip_count))?;
    } else {
        writeln!(out, "{}", NO_TRIPS)?;
    }
    write_footer(out, elapsed)
}

/// Missing-column messages are printed even when no trips matched; the
/// counts and birth-year figures only when there is at least one trip.
pub fn write_user_stats(
    out: &mut impl Write,
    stats: &UserStats,
    elapsed: Duration,
) -> io::Result<()> {
    write_title(out, USER_TITLE)?;
    let has_trips = stats.trip_count > 0;
    if !has_trips {
        writeln!(out, "{}", NO_TRIPS)?;
    }

    if let Some(user_types) = stats.user_types.as_ref().filter(|_| has_trips) {
        writeln!(out, "Counts of user types:")?;
        write_counts(out, user_types)?;
    }

    match &stats.genders {
        Some(genders) if has_trips => {
            writeln!(out, "Counts of gender:")?;
            write_counts(out, genders)?;
        }
        Some(_) => {}
        None => writeln!(out, "{}", NO_GENDER)?,
    }

    match &stats.birth_years {
        Some(years) => {
            writeln!(out, "Earliest year of birth:")?;
            writeln!(out, "  {}", years.earliest)?;
            writeln!(out, "Most recent year of birth:")?;
            writeln!(out, "  {}", years.most_recent)?;
            writeln!(out, "Most common year of birth:")?;
            for year in &years.most_common {
                writeln!(out, "  {}", year)?;
            }
        }
        None if has_trips || !stats.birth_year_column.is_present() => {
            writeln!(out, "{}", NO_BIRTH_YEAR)?;
        }
        None => {}
    }

    write_footer(out, elapsed)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn write_title(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out)
}

fn write_footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "This took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", separator())
}

fn write_counts(out: &mut impl Write, counts: &[(String, usize)]) -> io::Result<()> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, n) in counts {
        writeln!(
            out,
            "  {:<width$}  {:>9}  ({:.1}%)",
            value,
            format_count(*n),
            percentage(*n as f64, total as f64, 1),
            width = width
        )?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

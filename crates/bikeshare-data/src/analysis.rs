//! The four read-only statistics passes run over a filtered [`TripTable`].
//!
//! The time, station and duration passes return `None` for an empty table so
//! callers can print a single "no trips" notice instead of empty modes or a NaN
//! mean. [`user_stats`] always returns, because which columns a city publishes
//! does not depend on how many rows survived the filter.

use bikeshare_core::models::{Availability, OptionalColumn};
use bikeshare_core::time_utils::weekday_name;
use chrono::Weekday;

use crate::aggregator::{first_mode, modes, most_common_pair, value_counts, PairCount, Summary};
use crate::table::TripTable;

/// Monday-first week, indexed by `Weekday::num_days_from_monday`.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ── Public types ──────────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Month numbers (1–12) tied for most trips, ascending.
    pub popular_months: Vec<u32>,
    /// Weekdays tied for most trips, ordered by name.
    pub popular_weekdays: Vec<Weekday>,
    /// Start hour with the most trips; the earliest hour wins a tie.
    pub popular_hour: u32,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub popular_start_stations: Vec<String>,
    pub popular_end_stations: Vec<String>,
    pub popular_trip: PairCount,
}

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
    pub trip_count: usize,
}

/// Earliest, most recent and most common birth years.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Vec<i32>,
}

/// User demographics. A `None` count list means the city does not publish it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub trip_count: usize,
    pub user_types: Option<Vec<(String, usize)>>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_year_column: Availability,
    /// `None` when the column is absent or every filtered cell is blank.
    pub birth_years: Option<BirthYearStats>,
}

// ── Public functions ──────────────────────────────────────────────────────────

pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let records = table.records();
    let popular_hour = first_mode(records.iter().map(|r| r.hour()))?;

    let mut popular_weekdays: Vec<Weekday> =
        modes(records.iter().map(|r| r.weekday().num_days_from_monday()))
            .into_iter()
            .map(|i| WEEK[i as usize])
            .collect();
    popular_weekdays.sort_by_key(|day| weekday_name(*day));

    Some(TimeStats {
        popular_months: modes(records.iter().map(|r| r.month())),
        popular_weekdays,
        popular_hour,
    })
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let records = table.records();
    let popular_trip = most_common_pair(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )?;

    Some(StationStats {
        popular_start_stations: owned(modes(records.iter().map(|r| r.start_station.as_str()))),
        popular_end_stations: owned(modes(records.iter().map(|r| r.end_station.as_str()))),
        popular_trip,
    })
}

pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    let summary = Summary::from_values(table.records().iter().map(|r| r.trip_duration));
    let mean = summary.mean()?;
    Some(DurationStats {
        total: summary.sum,
        mean,
        trip_count: summary.count,
    })
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let records = table.records();

    let user_types = table
        .availability(OptionalColumn::UserType)
        .is_present()
        .then(|| owned_counts(value_counts(records.iter().filter_map(|r| r.user_type.as_deref()))));

    let genders = table
        .availability(OptionalColumn::Gender)
        .is_present()
        .then(|| owned_counts(value_counts(records.iter().filter_map(|r| r.gender.as_deref()))));

    let birth_year_column = table.availability(OptionalColumn::BirthYear);
    let birth_years = if birth_year_column.is_present() {
        birth_year_stats(records.iter().filter_map(|r| r.birth_year))
    } else {
        None
    };

    UserStats {
        trip_count: records.len(),
        user_types,
        genders,
        birth_year_column,
        birth_years,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: years.clone().min()?,
        most_recent: years.clone().max()?,
        most_common: modes(years),
    })
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

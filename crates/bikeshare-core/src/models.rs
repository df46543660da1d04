use std::fmt;

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

use crate::time_utils::weekday_name;

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities a trip dataset is available for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Case-insensitive lookup of a typed city name.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// Lower-case name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file backing this city.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── MonthFilter ───────────────────────────────────────────────────────────────

/// Months the datasets cover, in calendar order.
pub const SUPPORTED_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Month restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Case-insensitive parse of `"all"` or a month name from January to June.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.trim().to_lowercase();
        if lowered == "all" {
            return Some(MonthFilter::All);
        }
        SUPPORTED_MONTHS
            .iter()
            .find(|m| m.name().to_lowercase() == lowered)
            .map(|m| MonthFilter::Only(*m))
    }

    /// 1-based month number, or `None` for [`MonthFilter::All`].
    pub fn number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }

    pub fn matches(self, record: &TripRecord) -> bool {
        self.number().map_or(true, |n| record.month() == n)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

// ── DayFilter ─────────────────────────────────────────────────────────────────

/// Weekdays selectable at the prompt. Saturday and Sunday are not offered.
pub const SUPPORTED_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Day-of-week restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Case-insensitive parse of `"all"` or a weekday name from Monday to Friday.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.trim().to_lowercase();
        if lowered == "all" {
            return Some(DayFilter::All);
        }
        SUPPORTED_DAYS
            .iter()
            .find(|d| weekday_name(**d).to_lowercase() == lowered)
            .map(|d| DayFilter::Only(*d))
    }

    pub fn matches(self, record: &TripRecord) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => record.weekday() == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The city, month and day chosen once per session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// `true` when `record` passes both the month and the day restriction.
    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.matches(record) && self.day.matches(record)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={}, month={}, day={}", self.city, self.month, self.day)
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single bike rental read from a city CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in its source file.
    pub row_id: usize,
    /// Wall-clock time the trip started.
    pub start_time: NaiveDateTime,
    /// Wall-clock time the trip ended, when the cell parsed.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    /// `Subscriber`, `Customer`, ... when the city records it.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month of the start time (1–12).
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of week of the start time.
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day of the start time (0–23).
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ── Optional columns ──────────────────────────────────────────────────────────

/// Columns only some cities publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalColumn {
    UserType,
    Gender,
    BirthYear,
}

impl OptionalColumn {
    pub const ALL: [OptionalColumn; 3] = [
        OptionalColumn::UserType,
        OptionalColumn::Gender,
        OptionalColumn::BirthYear,
    ];

    /// Header text of the column in the CSV files.
    pub fn header(self) -> &'static str {
        match self {
            OptionalColumn::UserType => "User Type",
            OptionalColumn::Gender => "Gender",
            OptionalColumn::BirthYear => "Birth Year",
        }
    }
}

/// Whether a dataset exposes an optional column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Present,
    Absent,
}

impl Availability {
    pub fn is_present(self) -> bool {
        self == Availability::Present
    }
}

/// Which optional columns a city's header row carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl ColumnSet {
    /// Build from the (trimmed) header names of a CSV file.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for header in headers {
            match header.trim() {
                "User Type" => set.user_type = true,
                "Gender" => set.gender = true,
                "Birth Year" => set.birth_year = true,
                _ => {}
            }
        }
        set
    }

    pub fn availability(&self, column: OptionalColumn) -> Availability {
        let present = match column {
            OptionalColumn::UserType => self.user_type,
            OptionalColumn::Gender => self.gender,
            OptionalColumn::BirthYear => self.birth_year,
        };
        if present {
            Availability::Present
        } else {
            Availability::Absent
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

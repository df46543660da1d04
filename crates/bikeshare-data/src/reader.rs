//! CSV loading for the bikeshare explorer.
//!
//! Resolves a [`City`] to its backing file under the data directory and
//! converts every row into a [`TripRecord`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bikeshare_core::models::{City, ColumnSet, FilterSelection, TripRecord};
use bikeshare_core::time_utils::parse_trip_time;
use bikeshare_core::{BikeshareError, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::table::TripTable;

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];

/// One CSV row as it appears on disk. Empty optional cells become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "csv::invalid_option")]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self, row_id: usize) -> Result<TripRecord> {
        let start_time =
            parse_trip_time(&self.start_time).ok_or_else(|| BikeshareError::TimestampParse {
                row: row_id,
                value: self.start_time.clone(),
            })?;
        let end_time = self.end_time.as_deref().and_then(parse_trip_time);

        Ok(TripRecord {
            row_id,
            start_time,
            end_time,
            trip_duration: self.trip_duration,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self
                .birth_year
                .filter(|y| y.is_finite())
                .map(|y| y.trunc() as i32),
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and filter the dataset for `selection.city`.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let table = load_city(data_dir, selection.city)?;
    let total = table.len();
    let filtered = table.into_filtered(selection);

    info!(
        "Loaded {} trips for {}, {} match {}",
        total,
        filtered.city(),
        filtered.len(),
        selection
    );

    Ok(filtered)
}

/// Read every trip for `city` from `<data_dir>/<city file>`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = data_dir.join(city.file_name());
    let file = File::open(&path).map_err(|source| BikeshareError::FileRead {
        path: path.clone(),
        source,
    })?;
    read_trips(BufReader::new(file), &path, city)
}

/// Parse trips from any CSV source. `path` is only used in error messages.
pub fn read_trips<R: Read>(source: R, path: &Path, city: City) -> Result<TripTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: (*missing).to_string(),
        });
    }
    let columns = ColumnSet::from_headers(headers.iter());

    let mut records = Vec::new();
    for (row_id, row) in reader.deserialize::<RawTrip>().enumerate() {
        records.push(row?.into_record(row_id)?);
    }

    debug!(
        "File {}: {} rows, columns {:?}",
        path.display(),
        records.len(),
        columns
    );

    Ok(TripTable::new(city, columns, records))
}

/// Cities whose CSV file is not present under `data_dir`.
pub fn check_data_dir(data_dir: &Path) -> Vec<City> {
    let missing: Vec<City> = City::ALL
        .into_iter()
        .filter(|city| !data_dir.join(city.file_name()).is_file())
        .collect();

    for city in &missing {
        warn!(
            "Data file for {} not found: {}",
            city,
            data_dir.join(city.file_name()).display()
        );
    }

    missing
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{DayFilter, MonthFilter, OptionalColumn};
    use chrono::{Month, Weekday};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    fn parse(csv: &str, city: City) -> Result<TripTable> {
        read_trips(csv.as_bytes(), &PathBuf::from("test.csv"), city)
    }

    #[test]
    fn test_read_full_city() {
        let table = parse(CHICAGO, City::Chicago).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.city(), City::Chicago);
        for column in OptionalColumn::ALL {
            assert!(table.availability(column).is_present(), "{}", column.header());
        }

        let first = &table.records()[0];
        assert_eq!(first.row_id, 0);
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.start_station, "Wood St & Hubbard St");
        assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!(first.month(), 6);
        assert_eq!(first.weekday(), Weekday::Fri);
        assert_eq!(first.hour(), 15);
        assert!(first.end_time.is_some());
    }

    #[test]
    fn test_blank_optional_cells_are_absent() {
        let table = parse(CHICAGO, City::Chicago).unwrap();
        let last = &table.records()[3];
        assert_eq!(last.user_type.as_deref(), Some("Customer"));
        assert!(last.gender.is_none());
        assert!(last.birth_year.is_none());
    }

    #[test]
    fn test_read_city_without_gender_or_birth_year() {
        let table = parse(WASHINGTON, City::Washington).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.availability(OptionalColumn::UserType).is_present());
        assert!(!table.availability(OptionalColumn::Gender).is_present());
        assert!(!table.availability(OptionalColumn::BirthYear).is_present());
        assert!((table.records()[0].trip_duration - 489.066).abs() < 1e-9);
        assert!(table.records().iter().all(|r| r.gender.is_none()));
    }

    #[test]
    fn test_padded_headers_are_trimmed() {
        let csv = " Start Time , End Time ,Trip Duration,Start Station,End Station\n\
                   2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B\n";
        let table = parse(csv, City::Chicago).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,End Time,Trip Duration,End Station\n\
                   2017-01-02 09:00:00,2017-01-02 09:10:00,600,B\n";
        let err = parse(csv, City::Chicago).unwrap_err();
        match err {
            BikeshareError::MissingColumn { column, .. } => assert_eq!(column, "Start Station"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_timestamp_reports_row() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station\n\
                   2017-01-02 09:00:00,,600,A,B\n\
                   sometime,,600,A,B\n";
        let err = parse(csv, City::Chicago).unwrap_err();
        match err {
            BikeshareError::TimestampParse { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "sometime");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_duration_is_csv_error() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station\n\
                   2017-01-02 09:00:00,,long,A,B\n";
        let err = parse(csv, City::Chicago).unwrap_err();
        assert!(matches!(err, BikeshareError::Csv(_)));
    }

    #[test]
    fn test_missing_end_time_cell_is_tolerated() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station\n\
                   2017-01-02 09:00:00,,600,A,B\n";
        let table = parse(csv, City::Chicago).unwrap();
        assert!(table.records()[0].end_time.is_none());
    }

    #[test]
    fn test_load_city_missing_file() {
        let tmp = TempDir::new().expect("tempdir");
        let err = load_city(tmp.path(), City::NewYorkCity).unwrap_err();
        match err {
            BikeshareError::FileRead { path, .. } => {
                assert_eq!(path, tmp.path().join("new_york_city.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_data_applies_filters() {
        let tmp = TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("chicago.csv"), CHICAGO).expect("write csv");

        let selection = FilterSelection::new(
            City::Chicago,
            MonthFilter::Only(Month::June),
            DayFilter::Only(Weekday::Fri),
        );
        let table = load_data(tmp.path(), &selection).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].row_id, 0);
    }

    #[test]
    fn test_check_data_dir_lists_missing_files() {
        let tmp = TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("chicago.csv"), CHICAGO).expect("write csv");

        let missing = check_data_dir(tmp.path());
        assert_eq!(missing, vec![City::NewYorkCity, City::Washington]);
    }
}

//! Property-based tests for month/day filtering

use bikeshare_core::models::{
    City, ColumnSet, DayFilter, FilterSelection, MonthFilter, TripRecord, SUPPORTED_DAYS,
    SUPPORTED_MONTHS,
};
use bikeshare_data::analysis::duration_stats;
use bikeshare_data::reader::load_data;
use bikeshare_data::table::TripTable;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use tempfile::TempDir;

/// (day of year 0..181, hour, duration) → a trip in the first half of 2017.
fn arb_trips() -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    prop::collection::vec((0u32..181, 0u32..24, 1u32..10_000), 0..60)
}

fn start_time(offset: u32, hour: u32) -> NaiveDateTime {
    let jan1 = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    (jan1 + chrono::Duration::days(i64::from(offset)))
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn build_table(trips: &[(u32, u32, u32)]) -> TripTable {
    let records = trips
        .iter()
        .enumerate()
        .map(|(row_id, &(offset, hour, duration))| TripRecord {
            row_id,
            start_time: start_time(offset, hour),
            end_time: None,
            trip_duration: f64::from(duration),
            start_station: format!("S{}", offset % 7),
            end_station: format!("E{}", hour % 5),
            user_type: None,
            gender: None,
            birth_year: None,
        })
        .collect();
    TripTable::new(City::Chicago, ColumnSet::default(), records)
}

fn arb_month() -> impl Strategy<Value = MonthFilter> {
    prop_oneof![
        Just(MonthFilter::All),
        prop::sample::select(SUPPORTED_MONTHS.to_vec()).prop_map(MonthFilter::Only),
    ]
}

fn arb_day() -> impl Strategy<Value = DayFilter> {
    prop_oneof![
        Just(DayFilter::All),
        prop::sample::select(SUPPORTED_DAYS.to_vec()).prop_map(DayFilter::Only),
    ]
}

/// Same trips as [`build_table`], written as a city CSV file.
fn write_city_file(dir: &TempDir, trips: &[(u32, u32, u32)]) {
    let mut csv = String::from(",Start Time,End Time,Trip Duration,Start Station,End Station\n");
    for (i, &(offset, hour, duration)) in trips.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},,{},S{},E{}\n",
            i * 10,
            start_time(offset, hour).format("%Y-%m-%d %H:%M:%S"),
            duration,
            offset % 7,
            hour % 5
        ));
    }
    std::fs::write(dir.path().join(City::Chicago.file_name()), csv).unwrap();
}

fn filtered(table: &TripTable, sel: &FilterSelection) -> TripTable {
    table.clone().into_filtered(sel)
}

fn row_ids(table: &TripTable) -> Vec<usize> {
    table.records().iter().map(|r| r.row_id).collect()
}

proptest! {
    #[test]
    fn test_filter_is_idempotent(trips in arb_trips(), month in arb_month(), day in arb_day()) {
        let table = build_table(&trips);
        let sel = FilterSelection::new(City::Chicago, month, day);

        let once = filtered(&table, &sel);
        let twice = filtered(&once, &sel);
        prop_assert_eq!(row_ids(&once), row_ids(&twice));
    }

    #[test]
    fn test_months_partition_the_all_filter(trips in arb_trips(), day in arb_day()) {
        let table = build_table(&trips);
        let everything = filtered(&table, &FilterSelection::new(City::Chicago, MonthFilter::All, day));

        let mut union: Vec<usize> = SUPPORTED_MONTHS
            .iter()
            .flat_map(|m| {
                let sel = FilterSelection::new(City::Chicago, MonthFilter::Only(*m), day);
                row_ids(&filtered(&table, &sel))
            })
            .collect();
        let count_sum = union.len();
        union.sort_unstable();

        prop_assert_eq!(count_sum, everything.len());
        prop_assert_eq!(union, row_ids(&everything));
    }

    #[test]
    fn test_filtered_rows_match_selection(trips in arb_trips(), month in arb_month(), day in arb_day()) {
        let table = build_table(&trips);
        let sel = FilterSelection::new(City::Chicago, month, day);
        let kept = filtered(&table, &sel);

        for record in kept.records() {
            prop_assert!(sel.matches(record));
        }
        let rejected = table.records().iter().filter(|r| !sel.matches(r)).count();
        prop_assert_eq!(kept.len() + rejected, table.len());
    }

    #[test]
    fn test_mean_is_sum_over_rows(trips in arb_trips(), month in arb_month(), day in arb_day()) {
        let table = build_table(&trips).into_filtered(&FilterSelection::new(City::Chicago, month, day));
        match duration_stats(&table) {
            Some(stats) => {
                prop_assert_eq!(stats.trip_count, table.len());
                prop_assert!((stats.mean - stats.total / table.len() as f64).abs() < 1e-6);
            }
            None => prop_assert!(table.is_empty()),
        }
    }

    #[test]
    fn test_filter_preserves_hours(trips in arb_trips(), month in arb_month()) {
        let table = build_table(&trips);
        let kept = filtered(&table, &FilterSelection::new(City::Chicago, month, DayFilter::All));
        for record in kept.records() {
            let original = &table.records()[record.row_id];
            prop_assert_eq!(original.start_time.hour(), record.hour());
        }
    }

    #[test]
    fn test_load_data_matches_in_memory_filter(trips in arb_trips(), month in arb_month(), day in arb_day()) {
        let dir = TempDir::new().unwrap();
        write_city_file(&dir, &trips);
        let sel = FilterSelection::new(City::Chicago, month, day);

        let loaded = load_data(dir.path(), &sel).unwrap();
        let expected = filtered(&build_table(&trips), &sel);
        prop_assert_eq!(row_ids(&loaded), row_ids(&expected));
        prop_assert_eq!(loaded.records(), expected.records());
    }
}

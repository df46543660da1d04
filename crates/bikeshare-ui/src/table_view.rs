//! Raw trip rows rendered as a text table using comfy-table.
//!
//! Shows the row id, every column the city publishes, and the derived
//! `month` and `day_of_week` columns.

use bikeshare_core::formatting::format_number;
use bikeshare_core::models::{ColumnSet, OptionalColumn, TripRecord};
use bikeshare_core::time_utils::weekday_name;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `records` with headers. Returns an empty string for no rows.
///
/// # Example Output
///
/// ```text
///        Start Time            End Time              Trip Duration   Start Station   ...
///     0  2017-06-23 15:09:32   2017-06-23 15:14:53             321   Wood St & ...
/// ```
pub fn render_trip_rows(records: &[TripRecord], columns: ColumnSet) -> String {
    if records.is_empty() {
        return String::new();
    }

    let optional: Vec<OptionalColumn> = OptionalColumn::ALL
        .into_iter()
        .filter(|c| columns.availability(*c).is_present())
        .collect();

    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut headers = vec![
        Cell::new("").set_alignment(CellAlignment::Right),
        Cell::new("Start Time"),
        Cell::new("End Time"),
        Cell::new("Trip Duration").set_alignment(CellAlignment::Right),
        Cell::new("Start Station"),
        Cell::new("End Station"),
    ];
    headers.extend(optional.iter().map(|c| Cell::new(c.header())));
    headers.push(Cell::new("month").set_alignment(CellAlignment::Right));
    headers.push(Cell::new("day_of_week"));
    table.set_header(headers);

    for record in records {
        let mut row = vec![
            Cell::new(record.row_id).set_alignment(CellAlignment::Right),
            Cell::new(record.start_time.format(TIME_FORMAT)),
            Cell::new(
                record
                    .end_time
                    .map(|t| t.format(TIME_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(format_duration_cell(record.trip_duration))
                .set_alignment(CellAlignment::Right),
            Cell::new(&record.start_station),
            Cell::new(&record.end_station),
        ];
        row.extend(optional.iter().map(|c| Cell::new(optional_value(record, *c))));
        row.push(Cell::new(record.month()).set_alignment(CellAlignment::Right));
        row.push(Cell::new(weekday_name(record.weekday())));
        table.add_row(row);
    }

    table.to_string()
}

fn optional_value(record: &TripRecord, column: OptionalColumn) -> String {
    match column {
        OptionalColumn::UserType => record.user_type.clone().unwrap_or_default(),
        OptionalColumn::Gender => record.gender.clone().unwrap_or_default(),
        OptionalColumn::BirthYear => record
            .birth_year
            .map(|y| y.to_string())
            .unwrap_or_default(),
    }
}

/// Whole seconds print without decimals; fractional ones keep three places.
fn format_duration_cell(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{}", seconds as i64)
    } else {
        format_number(seconds, 3).replace(',', "")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

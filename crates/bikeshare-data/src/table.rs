//! In-memory trip table for one city.

use bikeshare_core::models::{
    Availability, City, ColumnSet, FilterSelection, OptionalColumn, TripRecord,
};

/// The trips of one city, optionally narrowed by a [`FilterSelection`].
///
/// Built fresh for every session iteration and never written back to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    columns: ColumnSet,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, columns: ColumnSet, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            columns,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    /// Optional columns present in the source file's header row.
    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source file exposes `column`.
    pub fn availability(&self, column: OptionalColumn) -> Availability {
        self.columns.availability(column)
    }

    /// Keep only the rows matching `selection`, in source order.
    ///
    /// The city of `selection` is not checked; only month and day apply.
    pub fn into_filtered(mut self, selection: &FilterSelection) -> TripTable {
        self.records.retain(|r| selection.matches(r));
        self
    }

    /// Up to `size` rows starting at `offset`. Empty once `offset` passes the end.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

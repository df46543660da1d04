//! Counting primitives shared by the statistics reports.
//!
//! All results are deterministic: ties are resolved by the natural ordering
//! of the counted values.

use std::collections::BTreeMap;

// ── Frequency tables ──────────────────────────────────────────────────────────

/// Occurrence count of every distinct value.
///
/// Sorted by count descending, ties by value ascending.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // Stable sort keeps the ascending key order from the BTreeMap for ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// All values sharing the highest occurrence count, ascending.
///
/// Empty input yields an empty vector.
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let counts = tally(values);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, n)| *n == max)
        .map(|(value, _)| value)
        .collect()
}

/// Smallest of the [`modes`], or `None` for empty input.
pub fn first_mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    modes(values).into_iter().next()
}

// ── Station pairs ─────────────────────────────────────────────────────────────

/// A start/end station combination and how many trips used it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    pub start: String,
    pub end: String,
    pub count: usize,
}

/// The most frequent `(start, end)` pair.
///
/// Ties go to the lexicographically smallest pair, comparing the start
/// station first.
pub fn most_common_pair<'a, I>(pairs: I) -> Option<PairCount>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let counts = tally(pairs);
    let mut best: Option<((&str, &str), usize)> = None;
    // Ascending iteration with a strict comparison keeps the first of equals.
    for (pair, count) in counts {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((pair, count));
        }
    }
    best.map(|((start, end), count)| PairCount {
        start: start.to_string(),
        end: end.to_string(),
        count,
    })
}

// ── Numeric summary ───────────────────────────────────────────────────────────

/// Sum, count and arithmetic mean of a numeric column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub sum: f64,
    pub count: usize,
}

impl Summary {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().fold(Summary::default(), |mut acc, v| {
            acc.sum += v;
            acc.count += 1;
            acc
        })
    }

    /// `sum / count`, or `None` when no values were seen.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn tally<T: Ord>(values: impl IntoIterator<Item = T>) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── value_counts ──────────────────────────────────────────────────────────

    #[test]
    fn test_value_counts_orders_by_count() {
        let counts = value_counts(["Subscriber", "Customer", "Subscriber", "Dependent", "Subscriber", "Customer"]);
        assert_eq!(
            counts,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_are_ascending() {
        let counts = value_counts(["Male", "Female"]);
        assert_eq!(counts, vec![("Female", 1), ("Male", 1)]);
    }

    #[test]
    fn test_value_counts_empty() {
        let counts = value_counts(Vec::<u32>::new());
        assert!(counts.is_empty());
    }

    // ── modes ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_modes_single() {
        assert_eq!(modes([6, 6, 5, 4]), vec![6]);
    }

    #[test]
    fn test_modes_reports_every_tie() {
        assert_eq!(modes([3, 1, 3, 1, 2]), vec![1, 3]);
    }

    #[test]
    fn test_modes_empty() {
        assert!(modes(Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn test_first_mode_picks_smallest_tie() {
        assert_eq!(first_mode([17, 8, 17, 8, 9]), Some(8));
        assert_eq!(first_mode(Vec::<u32>::new()), None);
    }

    // ── most_common_pair ──────────────────────────────────────────────────────

    #[test]
    fn test_most_common_pair() {
        let pairs = vec![("A", "B"), ("C", "D"), ("A", "B"), ("B", "A")];
        let best = most_common_pair(pairs).unwrap();
        assert_eq!(best.start, "A");
        assert_eq!(best.end, "B");
        assert_eq!(best.count, 2);
    }

    #[test]
    fn test_most_common_pair_direction_matters() {
        let pairs = vec![("A", "B"), ("B", "A"), ("B", "A")];
        let best = most_common_pair(pairs).unwrap();
        assert_eq!((best.start.as_str(), best.end.as_str()), ("B", "A"));
    }

    #[test]
    fn test_most_common_pair_tie_is_lexicographic() {
        let pairs = vec![("Z", "A"), ("M", "Q"), ("M", "B"), ("Z", "A"), ("M", "Q"), ("M", "B")];
        let best = most_common_pair(pairs).unwrap();
        assert_eq!((best.start.as_str(), best.end.as_str()), ("M", "B"));
        assert_eq!(best.count, 2);
    }

    #[test]
    fn test_most_common_pair_empty() {
        assert!(most_common_pair(Vec::<(&str, &str)>::new()).is_none());
    }

    // ── Summary ───────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_sum_and_mean() {
        let summary = Summary::from_values((1..=10).map(|i| f64::from(i) * 100.0));
        assert_eq!(summary.count, 10);
        assert!((summary.sum - 5500.0).abs() < 1e-9);
        assert!((summary.mean().unwrap() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_has_no_mean() {
        let summary = Summary::from_values(Vec::new());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert!(summary.mean().is_none());
    }
}

//! Ordering of count table entries.
//!
//! A counted table starts out in byte-value order. Sorting by count puts the
//! most frequent values first; ties are broken by ascending byte value so the
//! result does not depend on the sort algorithm.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::data::counter::{ByteCount, CountTable};

/// Order in which table entries are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending byte value (the order the counter produces)
    #[default]
    ByValue,
    /// Descending count, ties by ascending byte value
    ByCountDescending,
}

impl SortOrder {
    /// Order selected by the CLI's sort flag.
    pub fn from_sort_flag(sort: bool) -> Self {
        if sort {
            SortOrder::ByCountDescending
        } else {
            SortOrder::ByValue
        }
    }

    fn compare(&self, a: &ByteCount, b: &ByteCount) -> Ordering {
        match self {
            SortOrder::ByValue => a.value.cmp(&b.value),
            SortOrder::ByCountDescending => {
                b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value))
            }
        }
    }
}

impl CountTable {
    /// Reorder entries in place.
    ///
    /// Values are unique, so both orderings are total and the result is
    /// deterministic. Sorting twice with the same ordering changes nothing.
    pub fn sort(&mut self, ordering: SortOrder) {
        self.entries.sort_unstable_by(|a, b| ordering.compare(a, b));
        tracing::debug!(?ordering, "sorted count table");
    }

    /// Return a reordered copy, leaving `self` untouched.
    pub fn sorted(&self, ordering: SortOrder) -> Self {
        let mut table = self.clone();
        table.sort(ordering);
        table
    }

    /// Count that the graph scales against.
    ///
    /// For a count-sorted table this is the first entry's count; otherwise
    /// it is the largest count found by scanning every entry.
    pub fn reference_max(&self, ordering: SortOrder) -> u64 {
        match ordering {
            SortOrder::ByCountDescending => self.entries.first().map(|e| e.count).unwrap_or(0),
            SortOrder::ByValue => self.max_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::counter::count_bytes;

    #[test]
    fn test_default_is_by_value() {
        assert_eq!(SortOrder::default(), SortOrder::ByValue);
    }

    #[test]
    fn test_from_sort_flag() {
        assert_eq!(SortOrder::from_sort_flag(true), SortOrder::ByCountDescending);
        assert_eq!(SortOrder::from_sort_flag(false), SortOrder::ByValue);
    }

    #[test]
    fn test_sort_descending_example() {
        let mut table = count_bytes(b"aaab");
        table.sort(SortOrder::ByCountDescending);

        assert_eq!(table.entries()[0], ByteCount::new(0x61, 3));
        assert_eq!(table.entries()[1], ByteCount::new(0x62, 1));
        assert_eq!(table.reference_max(SortOrder::ByCountDescending), 3);
        assert!(table.is_sorted_by_count());
    }

    #[test]
    fn test_ties_break_by_value() {
        let mut table = count_bytes(b"zyxzyx");
        table.sort(SortOrder::ByCountDescending);

        let head: Vec<u8> = table.iter().take(3).map(|e| e.value).collect();
        assert_eq!(head, vec![b'x', b'y', b'z']);

        // Zero-count entries follow, still ascending by value
        assert_eq!(table.entries()[3].value, 0x00);
        assert_eq!(table.entries()[255].value, 0xFF);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let data: Vec<u8> = (0..5_000u32).map(|i| (i * i % 97) as u8).collect();
        let once = count_bytes(&data).sorted(SortOrder::ByCountDescending);
        let twice = once.sorted(SortOrder::ByCountDescending);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_preserves_pairs() {
        let original = count_bytes(b"the quick brown fox jumps over the lazy dog");
        let sorted = original.sorted(SortOrder::ByCountDescending);

        assert_eq!(sorted.len(), 256);
        assert_eq!(sorted.total(), original.total());
        for entry in original.iter() {
            assert_eq!(sorted.count_of(entry.value), entry.count);
        }
    }

    #[test]
    fn test_sort_by_value_restores_order() {
        let original = count_bytes(b"mississippi");
        let restored = original
            .sorted(SortOrder::ByCountDescending)
            .sorted(SortOrder::ByValue);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_reference_max_unsorted() {
        let table = count_bytes(b"abcccdd");
        assert_eq!(table.reference_max(SortOrder::ByValue), 3);
    }

    #[test]
    fn test_reference_max_empty() {
        let mut table = count_bytes(&[]);
        assert_eq!(table.reference_max(SortOrder::ByValue), 0);
        table.sort(SortOrder::ByCountDescending);
        assert_eq!(table.reference_max(SortOrder::ByCountDescending), 0);
        assert_eq!(table.entries()[0].value, 0x00);
    }
}

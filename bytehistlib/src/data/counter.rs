//! Byte frequency counting.
//!
//! This module provides the count table at the center of the pipeline:
//! one entry per possible byte value, filled in a single pass over the
//! input buffer.

use serde::{Deserialize, Serialize};

/// Number of distinct byte values.
pub const BYTE_VALUES: usize = 0x100;

/// Occurrence count for a single byte value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteCount {
    /// The byte value (0x00..=0xFF)
    pub value: u8,
    /// How many times the value occurs in the input
    pub count: u64,
}

impl ByteCount {
    /// Create a new entry.
    pub fn new(value: u8, count: u64) -> Self {
        Self { value, count }
    }

    /// Whether the byte is printable ASCII (0x20..=0x7E).
    pub fn is_printable(&self) -> bool {
        (0x20..=0x7E).contains(&self.value)
    }
}

/// Frequency distribution of byte values.
///
/// Always holds exactly 256 entries, one per byte value. A freshly counted
/// table is ordered by ascending value; [`CountTable::sort`] may reorder the
/// entries but never adds, removes or changes a value/count pair.
///
/// Only `Serialize` is derived: a deserialized table could break the
/// one-entry-per-value invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountTable {
    /// Entries in their current order
    pub(crate) entries: Vec<ByteCount>,
    /// Number of bytes counted (sum of all counts)
    pub(crate) total: u64,
}

impl Default for CountTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CountTable {
    /// Create a table with every count at zero.
    pub fn new() -> Self {
        let entries = (0..BYTE_VALUES)
            .map(|value| ByteCount::new(value as u8, 0))
            .collect();
        Self { entries, total: 0 }
    }

    /// Count every byte of `data`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytehistlib::CountTable;
    ///
    /// let table = CountTable::from_bytes(b"aaab");
    /// assert_eq!(table.count_of(b'a'), 3);
    /// assert_eq!(table.count_of(b'b'), 1);
    /// assert_eq!(table.total(), 4);
    /// ```
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            // Entries are still in value order here, so the byte is its own index.
            table.entries[byte as usize].count += 1;
        }
        table.total = data.len() as u64;

        tracing::debug!(
            bytes = table.total,
            distinct = table.distinct_values(),
            "counted byte frequencies"
        );

        table
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[ByteCount] {
        &self.entries
    }

    /// Iterate over entries in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, ByteCount> {
        self.entries.iter()
    }

    /// Number of entries (always 256).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a table holds an entry for every byte value, even
    /// when nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for a byte value, regardless of the current order.
    pub fn count_of(&self, value: u8) -> u64 {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Largest count over all entries (0 for an empty input).
    pub fn max_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// Number of byte values that occur at least once.
    pub fn distinct_values(&self) -> usize {
        self.entries.iter().filter(|e| e.count > 0).count()
    }

    /// Whether entries are ordered by descending count.
    pub fn is_sorted_by_count(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].count >= w[1].count)
    }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = &'a ByteCount;
    type IntoIter = std::slice::Iter<'a, ByteCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count the byte frequencies of `data`.
///
/// Shorthand for [`CountTable::from_bytes`].
pub fn count_bytes(data: &[u8]) -> CountTable {
    CountTable::from_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zeroed_and_ordered() {
        let table = CountTable::new();
        assert_eq!(table.len(), BYTE_VALUES);
        assert_eq!(table.total(), 0);
        for (i, entry) in table.iter().enumerate() {
            assert_eq!(entry.value as usize, i);
            assert_eq!(entry.count, 0);
        }
    }

    #[test]
    fn test_count_example() {
        let table = count_bytes(b"aaab");

        assert_eq!(table.count_of(0x61), 3);
        assert_eq!(table.count_of(0x62), 1);
        assert_eq!(table.total(), 4);
        assert_eq!(table.distinct_values(), 2);
        assert_eq!(table.max_count(), 3);

        let others: u64 = table
            .iter()
            .filter(|e| e.value != 0x61 && e.value != 0x62)
            .map(|e| e.count)
            .sum();
        assert_eq!(others, 0);
    }

    #[test]
    fn test_sum_equals_length() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 251) as u8).collect();
        let table = count_bytes(&data);

        let sum: u64 = table.iter().map(|e| e.count).sum();
        assert_eq!(sum, data.len() as u64);
        assert_eq!(table.total(), data.len() as u64);
    }

    #[test]
    fn test_every_value_appears_once() {
        let table = count_bytes(b"\x00\xff\x80hello");
        let mut seen = [false; BYTE_VALUES];
        for entry in &table {
            assert!(!seen[entry.value as usize], "duplicate {:02X}", entry.value);
            seen[entry.value as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_empty_input() {
        let table = count_bytes(&[]);
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.distinct_values(), 0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let table = count_bytes(&data);
        assert!(table.iter().all(|e| e.count == 2));
        assert_eq!(table.distinct_values(), 256);
    }

    #[test]
    fn test_printable_range() {
        assert!(!ByteCount::new(0x1F, 0).is_printable());
        assert!(ByteCount::new(0x20, 0).is_printable());
        assert!(ByteCount::new(b'~', 0).is_printable());
        assert!(!ByteCount::new(0x7F, 0).is_printable());
        assert!(!ByteCount::new(0xE9, 0).is_printable());
    }

    #[test]
    fn test_serialized_shape() {
        let table = count_bytes(b"ab");
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["entries"].as_array().unwrap().len(), 256);
        assert_eq!(json["entries"][0x61]["value"], 0x61);
        assert_eq!(json["entries"][0x61]["count"], 1);
    }
}

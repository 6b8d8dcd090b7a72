//! Frequency table of a count table.
//!
//! One line per byte value in the table's current order, followed by the
//! total size:
//!
//! ```text
//! 61 (a): Frequency: 75.000%, Count: 3
//! 62 (b): Frequency: 25.000%, Count: 1
//! 00 (.): Frequency: 00.000%, Count: 0
//! ...
//! Total Size: 4
//! ```

use std::fmt::Write;

use crate::data::counter::{ByteCount, CountTable};

/// Character shown for bytes outside printable ASCII.
pub const DEFAULT_PLACEHOLDER: char = '.';

/// Renders a count table as a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRenderer {
    total: u64,
    placeholder: char,
}

impl TableRenderer {
    /// Create a renderer for `total` counted bytes.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Create a renderer for the table's own total.
    pub fn for_table(table: &CountTable) -> Self {
        Self::new(table.total())
    }

    /// Set the character shown for non-printable bytes.
    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Percentage of the input taken by `count`; 0 when nothing was counted.
    pub fn frequency(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    /// One table line for an entry.
    pub fn row(&self, entry: &ByteCount) -> String {
        let shown = if entry.is_printable() {
            entry.value as char
        } else {
            self.placeholder
        };
        format!(
            "{:02X} ({}): Frequency: {:06.3}%, Count: {}",
            entry.value,
            shown,
            self.frequency(entry.count),
            entry.count
        )
    }

    /// Closing line with the total size.
    pub fn footer(&self) -> String {
        format!("Total Size: {}", self.total)
    }

    /// Render the whole table, one `\n`-terminated line per row.
    pub fn render(&self, table: &CountTable) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut out, table);
        out
    }

    /// Render the whole table into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, table: &CountTable) -> std::fmt::Result {
        for entry in table {
            writeln!(out, "{}", self.row(entry))?;
        }
        writeln!(out, "{}", self.footer())?;

        tracing::debug!(total = self.total, "rendered table");
        Ok(())
    }
}

//! ASCII bar graph of a count table.
//!
//! The graph is `width` columns wide. A header line carries the scale
//! (from `+0%` up to the top percentage), then one line per byte value with
//! a bar proportional to its frequency, then a footer rule:
//!
//! ```text
//!    +0%--------------------------------------------------------------------75.00%
//! 61 |****************************************************************************
//! 62 |*************************
//!    +----------------------------------------------------------------------------
//! ```
//!
//! The entry whose count equals the reference maximum gets a bar of exactly
//! `width - 4` characters, filling the line after the `XX |` prefix.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::data::counter::{ByteCount, CountTable};
use crate::options::{MAX_WIDTH, MIN_WIDTH};
use crate::query::ordering::SortOrder;

/// Columns taken by the `XX |` row prefix and the `   +` footer prefix.
const ROW_PREFIX_WIDTH: usize = 4;

/// Start of the header line.
const HEADER_PREFIX: &str = "   +0%";

/// Characters used to draw the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStyle {
    /// Rule character for the header and footer lines
    pub fill: char,
    /// Bar character
    pub bar: char,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            fill: '-',
            bar: '*',
        }
    }
}

/// Renders a count table as a bar graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphRenderer {
    width: usize,
    reference_max: u64,
    total: u64,
    style: GraphStyle,
}

impl GraphRenderer {
    /// Create a renderer.
    ///
    /// `width` is clamped to `MIN_WIDTH..=MAX_WIDTH`. `reference_max` is the count that
    /// maps to a full-width bar and `total` the number of bytes counted.
    pub fn new(width: usize, reference_max: u64, total: u64) -> Self {
        Self {
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
            reference_max,
            total,
            style: GraphStyle::default(),
        }
    }

    /// Create a renderer scaled to `table` as ordered by `ordering`.
    pub fn for_table(table: &CountTable, width: usize, ordering: SortOrder) -> Self {
        Self::new(width, table.reference_max(ordering), table.total())
    }

    /// Set the drawing characters.
    pub fn style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Effective width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Relative frequency of the reference maximum, in `0.0..=1.0`.
    ///
    /// Zero when nothing was counted.
    pub fn top_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.reference_max as f64 / self.total as f64
    }

    /// Bar length in characters for a count.
    pub fn bar_len(&self, count: u64) -> usize {
        let top = self.top_percentage();
        if self.total == 0 || top == 0.0 {
            return 0;
        }
        let frequency = count as f64 / self.total as f64;
        let span = (self.width - ROW_PREFIX_WIDTH) as f64;
        (frequency / top * span).round() as usize
    }

    /// Scale line: `   +0%`, a rule, then the top percentage.
    ///
    /// The rule shrinks to fit the label, so the line is `width` columns wide
    /// unless the label alone would overflow it.
    pub fn header(&self) -> String {
        let label = format!("{:.2}%", self.top_percentage() * 100.0);
        let rule_len = self
            .width
            .saturating_sub(HEADER_PREFIX.len() + label.len());

        let mut line = String::with_capacity(self.width);
        line.push_str(HEADER_PREFIX);
        line.extend(std::iter::repeat(self.style.fill).take(rule_len));
        line.push_str(&label);
        line
    }

    /// One graph line for an entry.
    pub fn row(&self, entry: &ByteCount) -> String {
        let mut line = format!("{:02X} |", entry.value);
        line.extend(std::iter::repeat(self.style.bar).take(self.bar_len(entry.count)));
        line
    }

    /// Closing rule spanning the full width.
    pub fn footer(&self) -> String {
        let mut line = String::with_capacity(self.width);
        line.push_str("   +");
        line.extend(std::iter::repeat(self.style.fill).take(self.width - ROW_PREFIX_WIDTH));
        line
    }

    /// Render the whole graph, one `\n`-terminated line per row.
    pub fn render(&self, table: &CountTable) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut out, table);
        out
    }

    /// Render the whole graph into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, table: &CountTable) -> std::fmt::Result {
        writeln!(out, "{}", self.header())?;
        for entry in table {
            writeln!(out, "{}", self.row(entry))?;
        }
        writeln!(out, "{}", self.footer())?;

        tracing::debug!(
            width = self.width,
            reference_max = self.reference_max,
            total = self.total,
            "rendered graph"
        );
        Ok(())
    }
}

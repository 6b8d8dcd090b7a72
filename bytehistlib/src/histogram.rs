//! High-level histogram API.
//!
//! This module runs the whole pipeline for a byte buffer: count, order,
//! then render the selected views.

use std::path::Path;

use crate::data::counter::CountTable;
use crate::options::HistogramOptions;
use crate::output::graph::GraphRenderer;
use crate::output::table::TableRenderer;
use crate::source::reader::ByteSource;
use crate::Result;

/// Count `data` and order the result as `options` asks.
///
/// # Example
///
/// ```rust
/// use bytehistlib::{analyze, HistogramOptions};
///
/// let table = analyze(b"aaab", &HistogramOptions::new().sort(true));
/// assert_eq!(table.entries()[0].value, b'a');
/// assert_eq!(table.entries()[0].count, 3);
/// ```
pub fn analyze(data: &[u8], options: &HistogramOptions) -> CountTable {
    let mut table = CountTable::from_bytes(data);
    table.sort(options.ordering);
    table
}

/// Render an already counted and ordered table.
///
/// The graph comes first, then the table; either may be disabled. With both
/// views disabled the result is empty.
pub fn render_table(table: &CountTable, options: &HistogramOptions) -> String {
    let mut output = String::new();

    if options.views.graph {
        let graph = GraphRenderer::for_table(table, options.width, options.ordering);
        output.push_str(&graph.render(table));
    }

    if options.views.table {
        output.push_str(&TableRenderer::for_table(table).render(table));
    }

    output
}

/// Count, order and render `data` in one call.
///
/// # Example
///
/// ```rust
/// use bytehistlib::{render_histogram, HistogramOptions, Views};
///
/// let text = render_histogram(b"aaab", &HistogramOptions::new().views(Views::table_only()));
/// assert!(text.contains("61 (a): Frequency: 75.000%, Count: 3\n"));
/// assert!(text.ends_with("Total Size: 4\n"));
/// ```
pub fn render_histogram(data: &[u8], options: &HistogramOptions) -> String {
    let table = analyze(data, options);
    render_table(&table, options)
}

/// Read a file and render its histogram.
///
/// The file contents are released before this returns.
pub fn render_file(path: impl AsRef<Path>, options: &HistogramOptions) -> Result<String> {
    let source = ByteSource::open(path)?;
    Ok(render_histogram(source.bytes(), options))
}

//! # bytehistlib
//!
//! A library for computing and rendering the frequency distribution of byte
//! values in a buffer.
//!
//! ## Overview
//!
//! The pipeline has three stages, each in its own module:
//!
//! - **data**: count every byte into a 256-entry [`CountTable`]
//! - **query**: optionally reorder the table by descending count
//! - **output**: render an ASCII bar graph and/or a frequency table
//!
//! The [`source`] module reads a file into memory for the pipeline, and
//! [`histogram`] strings the stages together.
//!
//! ## Features
//!
//! - **Single pass**: counting is O(n) over the buffer with a fixed table
//! - **Deterministic sort**: equal counts are ordered by byte value
//! - **Empty input**: zero-length buffers render zero frequencies, no NaN
//! - **Pure Rust data types**: returns structured data and strings, no I/O
//!   side effects outside [`source`]
//!
//! ## Example
//!
//! ```rust
//! use bytehistlib::{count_bytes, render_histogram, HistogramOptions, SortOrder, Views};
//!
//! let mut table = count_bytes(b"aaab");
//! assert_eq!(table.count_of(b'a'), 3);
//!
//! table.sort(SortOrder::ByCountDescending);
//! assert_eq!(table.entries()[0].value, b'a');
//!
//! let options = HistogramOptions::new().width(40).sort(true).views(Views::graph_only());
//! let graph = render_histogram(b"aaab", &options);
//! assert!(graph.lines().next().unwrap().ends_with("75.00%"));
//! ```

pub mod data;
pub mod error;
pub mod histogram;
pub mod options;
pub mod output;
pub mod query;
pub mod source;

pub use data::{count_bytes, ByteCount, CountTable, BYTE_VALUES};
pub use error::HistogramError;
pub use histogram::{analyze, render_file, render_histogram, render_table};
pub use options::{clamp_width, HistogramOptions, Views, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
pub use output::{GraphRenderer, GraphStyle, TableRenderer};
pub use query::SortOrder;
pub use source::ByteSource;

/// Result type for bytehistlib operations
pub type Result<T> = std::result::Result<T, HistogramError>;

//! Query processing: order count table entries.
//!
//! This module handles the second stage of the pipeline. A counted table is
//! in byte-value order; [`SortOrder::ByCountDescending`] lists the most
//! frequent values first.
//!
//! ## Example
//!
//! ```rust
//! use bytehistlib::{count_bytes, SortOrder};
//!
//! let mut table = count_bytes(b"aaab");
//! table.sort(SortOrder::ByCountDescending);
//! assert_eq!(table.entries()[0].value, b'a');
//! ```

pub mod ordering;

pub use ordering::SortOrder;

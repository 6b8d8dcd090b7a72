//! Output formatting: present count tables as text.
//!
//! This module handles the last stage of the pipeline. It provides:
//!
//! - **GraphRenderer**: ASCII bar graph scaled to a configurable width
//! - **TableRenderer**: per-byte frequency and count table
//!
//! Both renderers are read-only over the table and print entries in the
//! table's current order. All ordering happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use bytehistlib::output::{GraphRenderer, TableRenderer};
//! use bytehistlib::{count_bytes, SortOrder};
//!
//! let table = count_bytes(b"aaab");
//! let graph = GraphRenderer::for_table(&table, 40, SortOrder::ByValue).render(&table);
//! let rows = TableRenderer::for_table(&table).render(&table);
//! assert!(graph.starts_with("   +0%"));
//! assert!(rows.ends_with("Total Size: 4\n"));
//! ```

pub mod graph;
pub mod table;

pub use graph::{GraphRenderer, GraphStyle};
pub use table::{TableRenderer, DEFAULT_PLACEHOLDER};

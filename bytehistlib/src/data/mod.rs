//! Data collection: count byte frequencies.
//!
//! This module handles the first stage of the pipeline: turning a byte
//! buffer into a [`CountTable`] with one [`ByteCount`] per byte value.
//!
//! ## Example
//!
//! ```rust
//! use bytehistlib::data::count_bytes;
//!
//! let table = count_bytes(b"hello");
//! assert_eq!(table.count_of(b'l'), 2);
//! ```

pub mod counter;

pub use counter::{count_bytes, ByteCount, CountTable, BYTE_VALUES};

//! Source acquisition: get the bytes to analyze.
//!
//! This module sits in front of the pipeline. It reads an input file into
//! memory, reporting open, stat and read failures as distinct errors so the
//! caller can tell them apart.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bytehistlib::source::ByteSource;
//!
//! let source = ByteSource::open("firmware.bin")?;
//! println!("{} bytes", source.len());
//! ```

pub mod reader;

pub use reader::ByteSource;

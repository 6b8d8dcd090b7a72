//! Scoped, read-only acquisition of a file's bytes.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::HistogramError;
use crate::Result;

/// The complete contents of an input file.
///
/// The file handle lives only inside [`ByteSource::open`] and is closed on
/// every return path, including failures. The bytes themselves are owned
/// and released when the `ByteSource` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ByteSource {
    /// Read a file in three stages, each with its own error: open, stat, read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytehistlib::ByteSource;
    /// use std::fs;
    /// use tempfile::tempdir;
    ///
    /// let dir = tempdir().unwrap();
    /// let path = dir.path().join("input.bin");
    /// fs::write(&path, b"aaab").unwrap();
    ///
    /// let source = ByteSource::open(&path).unwrap();
    /// assert_eq!(source.bytes(), b"aaab");
    /// assert_eq!(source.len(), 4);
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|source| HistogramError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = file.metadata().map_err(|source| HistogramError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(path = %path.display(), size = metadata.len(), "opened input");

        let mut bytes = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
        file.read_to_end(&mut bytes)
            .map_err(|source| HistogramError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::trace!(path = %path.display(), read = bytes.len(), "read input");

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Path the bytes were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes read.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file was empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

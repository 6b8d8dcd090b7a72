//! Error types for bytehistlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring the bytes of an input file.
///
/// Counting and rendering never fail once a buffer is available, so every
/// variant here belongs to the acquisition stage. Each stage has its own
/// variant so callers can tell them apart (see [`HistogramError::exit_code`]).
#[derive(Error, Debug)]
pub enum HistogramError {
    /// The file could not be opened for reading
    #[error("cannot open {} for reading: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file's metadata could not be queried
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was opened but its contents could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HistogramError {
    /// Path of the file that caused the error.
    pub fn path(&self) -> &PathBuf {
        match self {
            HistogramError::Open { path, .. }
            | HistogramError::Stat { path, .. }
            | HistogramError::Read { path, .. } => path,
        }
    }

    /// Process exit code for this failure: 3 open, 4 stat, 5 read.
    pub fn exit_code(&self) -> u8 {
        match self {
            HistogramError::Open { .. } => 3,
            HistogramError::Stat { .. } => 4,
            HistogramError::Read { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let path = PathBuf::from("input.bin");
        let open = HistogramError::Open {
            path: path.clone(),
            source: io_err(),
        };
        let stat = HistogramError::Stat {
            path: path.clone(),
            source: io_err(),
        };
        let read = HistogramError::Read {
            path,
            source: io_err(),
        };

        assert_eq!(open.exit_code(), 3);
        assert_eq!(stat.exit_code(), 4);
        assert_eq!(read.exit_code(), 5);
    }

    #[test]
    fn test_message_names_path() {
        let err = HistogramError::Open {
            path: PathBuf::from("/tmp/missing.bin"),
            source: io_err(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot open /tmp/missing.bin for reading"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.path(), &PathBuf::from("/tmp/missing.bin"));
    }
}

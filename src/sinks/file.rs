//! Append-only file sink

use crate::core::error::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Appends rendered lines to a named file.
///
/// The file is created if absent; each append writes `"\n" + text` so the
/// separator leads rather than trails. The sink holds no open handle and
/// no lock: the per-call file-name override means any submit may target a
/// different path, and callers serialize access (the logger's write
/// region already does for a single instance).
pub struct FileSink;

impl FileSink {
    /// Append one line to `path`, creating the file first if needed.
    ///
    /// Any create/open/write failure is returned with the path attached;
    /// nothing is swallowed.
    pub fn append(path: impl AsRef<Path>, text: &str) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::io(path, source))?;
        file.write_all(b"\n")
            .and_then(|()| file.write_all(text.as_bytes()))
            .map_err(|source| LoggerError::io(path, source))?;
        Ok(())
    }
}

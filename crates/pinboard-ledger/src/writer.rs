//! Ledger writer implementation.
//!
//! Two write disciplines, matching the stores' mutation model: `append`
//! adds one record to the end of the file, `rewrite` replaces the whole
//! file with a new record set. Deletion and sweeping go through `rewrite`
//! because the format has no index; removal is a read-all/write-all cycle.
//!
//! `rewrite` is not atomic with respect to a concurrent external writer:
//! two processes pointed at one ledger file can interleave a
//! read-modify-write. Single-writer-at-a-time usage is assumed.

use crate::errors::LedgerError;
use pinboard_record::LineCodec;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Ledger writer for one record file.
pub struct LedgerWriter<C: LineCodec> {
    path: PathBuf,
    _codec: PhantomData<C>,
}

impl<C: LineCodec> LedgerWriter<C> {
    /// Creates a writer bound to `path`. The file is opened per operation,
    /// so a writer may outlive rewrites performed elsewhere.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _codec: PhantomData,
        }
    }

    /// Appends one encoded record as a newline-terminated line, creating
    /// the file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be opened or written.
    pub fn append(&self, record: &C::Record) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(C::encode(record).as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    /// Replaces the file contents with `records`, one line each.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be written.
    pub fn rewrite(&self, records: &[C::Record]) -> Result<(), LedgerError> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(&C::encode(record));
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

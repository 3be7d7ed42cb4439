//! Ledger reader implementation.

use crate::errors::LedgerError;
use pinboard_record::LineCodec;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::Path;

/// Read mode for handling lines that fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Strict mode: a malformed line aborts the read. Store operations use
    /// this mode, since skipping a record silently would let a later
    /// append duplicate a key the store believes is free.
    Strict,
    /// Permissive mode: malformed lines are skipped. Recovery tooling only.
    Permissive,
}

/// Ledger reader: decodes every line of a record file through a codec.
///
/// The whole file is read at open; ledger files are small and every store
/// operation works on the complete record set. A file that does not exist
/// yet is an empty ledger, not an error (first run has no store files).
pub struct LedgerReader<C: LineCodec> {
    lines: Vec<String>,
    next: usize,
    mode: ReadMode,
    _codec: PhantomData<C>,
}

impl<C: LineCodec> LedgerReader<C> {
    /// Opens a ledger file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file exists but cannot be read.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, LedgerError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let lines = contents.lines().map(str::to_string).collect();
        Ok(Self {
            lines,
            next: 0,
            mode,
            _codec: PhantomData,
        })
    }

    /// Reads the next record. Returns `Ok(None)` at end of file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedRecord`] in strict mode when a line
    /// fails to decode; permissive mode skips such lines.
    pub fn read_next(&mut self) -> Result<Option<C::Record>, LedgerError> {
        while self.next < self.lines.len() {
            let line_no = self.next + 1;
            let line = &self.lines[self.next];
            self.next += 1;

            match C::decode(line) {
                Ok(record) => return Ok(Some(record)),
                Err(source) => match self.mode {
                    ReadMode::Strict => {
                        return Err(LedgerError::MalformedRecord {
                            line: line_no,
                            source,
                        })
                    }
                    ReadMode::Permissive => continue,
                },
            }
        }
        Ok(None)
    }

    /// Reads every record into a vector.
    pub fn read_all(mut self) -> Result<Vec<C::Record>, LedgerError> {
        let mut records = Vec::new();
        while let Some(record) = self.read_next()? {
            records.push(record);
        }
        Ok(records)
    }
}

use pinboard_record::CodecError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// I/O error during read or write. The store is unavailable; note that
    /// a file that simply does not exist yet reads as an empty store and
    /// does not produce this error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A stored line could not be decoded in strict mode.
    #[error("malformed record at line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// Reason the line could not be decoded.
        source: CodecError,
    },
}

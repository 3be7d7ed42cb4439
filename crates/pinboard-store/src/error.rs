use pinboard_core::EventParseError;
use pinboard_ledger::LedgerError;
use pinboard_record::ValidationError;
use thiserror::Error;

/// Error types for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying ledger file failed to read, decode, or write.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// A stored event line decoded but its fields failed re-validation.
    #[error("invalid stored event: {0}")]
    Event(#[from] EventParseError),
    /// A stored credential line decoded but its fields failed re-validation.
    #[error("invalid stored credential: {0}")]
    Credential(#[from] ValidationError),
}

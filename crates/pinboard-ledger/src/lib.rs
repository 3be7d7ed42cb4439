//! Flat-file persistence for pinboard records.
//!
//! This crate provides:
//! - A reader that decodes newline-terminated UTF-8 record lines through a
//!   [`LineCodec`](pinboard_record::LineCodec), with strict and permissive
//!   modes for malformed lines
//! - A writer with the two mutation disciplines the stores use: append for
//!   new records, rewrite-all for removals
//!
//! A missing file reads as an empty ledger: the first run of the
//! application has no store files and that is not an error.
//!
#![deny(missing_docs)]

/// Error types for ledger operations.
pub mod errors;
/// Ledger reader implementation.
pub mod reader;
/// Ledger writer implementation.
pub mod writer;

pub use errors::LedgerError;
pub use reader::{LedgerReader, ReadMode};
pub use writer::LedgerWriter;

//! Line codec for the two pipe-delimited record shapes.
//!
//! Credential lines are `username:digest`. Event lines are
//! `name||venue|owner|DD/MM/YYYY HH:MM|description`, with any newline in
//! the description written as the two characters `\` `n`. Decoding is the
//! exact inverse of encoding for every valid record.

use thiserror::Error;

/// The event-record field delimiter. Field values must not contain it.
pub const FIELD_SEPARATOR: char = '|';
/// The separator between an event's name and its remaining fields.
pub const NAME_SEPARATOR: &str = "||";
/// The separator between a credential's username and digest.
pub const CREDENTIAL_SEPARATOR: char = ':';
/// The two-character escape a description newline becomes on the wire.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Errors that can occur when decoding a record line.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The line does not have the expected separator structure.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// Reason the line could not be decoded.
        reason: String,
    },
}

/// A record shape that can be written to and read back from one text line.
///
/// Implementations must satisfy the round-trip law:
/// `decode(&encode(record))` returns a record equal to the input for every
/// record whose fields respect the shape's charset rules.
pub trait LineCodec {
    /// The decoded record type.
    type Record;

    /// Encodes a record as a single line, without the trailing newline.
    fn encode(record: &Self::Record) -> String;

    /// Decodes a record from a single line.
    fn decode(line: &str) -> Result<Self::Record, CodecError>;
}

/// Raw (string-level) credential record: `username:digest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Account name.
    pub username: String,
    /// Hex password digest.
    pub digest: String,
}

/// Codec for credential lines.
#[derive(Debug, Clone, Copy)]
pub struct CredentialCodec;

impl LineCodec for CredentialCodec {
    type Record = CredentialRecord;

    fn encode(record: &Self::Record) -> String {
        format!(
            "{}{}{}",
            record.username, CREDENTIAL_SEPARATOR, record.digest
        )
    }

    fn decode(line: &str) -> Result<Self::Record, CodecError> {
        let (username, digest) =
            line.split_once(CREDENTIAL_SEPARATOR)
                .ok_or_else(|| CodecError::MalformedRecord {
                    reason: format!("missing '{CREDENTIAL_SEPARATOR}' separator"),
                })?;
        Ok(CredentialRecord {
            username: username.to_string(),
            digest: digest.to_string(),
        })
    }
}

/// Raw (string-level) event record, fields in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event name (the record key).
    pub name: String,
    /// Venue the event is attached to.
    pub venue: String,
    /// Owner username; empty when the record has no owner.
    pub owner: String,
    /// Timestamp wire text `DD/MM/YYYY HH:MM`.
    pub stamp: String,
    /// Description with real newlines (unescaped).
    pub description: String,
}

/// Codec for event lines.
#[derive(Debug, Clone, Copy)]
pub struct EventCodec;

impl LineCodec for EventCodec {
    type Record = EventRecord;

    fn encode(record: &Self::Record) -> String {
        format!(
            "{}{}{}",
            record.name,
            NAME_SEPARATOR,
            [
                record.venue.as_str(),
                record.owner.as_str(),
                record.stamp.as_str(),
                &escape_newlines(&record.description),
            ]
            .join(&FIELD_SEPARATOR.to_string())
        )
    }

    fn decode(line: &str) -> Result<Self::Record, CodecError> {
        let (name, rest) =
            line.split_once(NAME_SEPARATOR)
                .ok_or_else(|| CodecError::MalformedRecord {
                    reason: format!("missing '{NAME_SEPARATOR}' name separator"),
                })?;

        let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(CodecError::MalformedRecord {
                reason: format!(
                    "expected 4 '{FIELD_SEPARATOR}'-delimited fields after the name, found {}",
                    fields.len()
                ),
            });
        }

        Ok(EventRecord {
            name: name.to_string(),
            venue: fields[0].to_string(),
            owner: fields[1].to_string(),
            stamp: fields[2].to_string(),
            description: unescape_newlines(fields[3]),
        })
    }
}

/// Replaces each newline in `text` with the two-character escape.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', NEWLINE_ESCAPE)
}

/// Replaces each two-character escape in `text` with a newline.
pub fn unescape_newlines(text: &str) -> String {
    text.replace(NEWLINE_ESCAPE, "\n")
}

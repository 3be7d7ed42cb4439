//! Wire-format primitives for pinboard's flat-file stores.
//!
//! Every field that appears in a stored line lives in this crate: the
//! validated field newtypes, the minute-precision timestamp, the one-way
//! password digest, and the line codec for the two record shapes. The crate
//! is pure (no I/O), so the format can be tested without touching disk.
//!
#![deny(missing_docs)]

/// Line codec for credential and event records.
pub mod codec;
/// One-way password digest.
pub mod digest;
/// Validated field newtypes and charset rules.
pub mod fields;
/// Minute-precision timestamps with calendar validation.
pub mod stamp;
/// Validation errors shared by the field primitives.
pub mod validation;

pub use codec::{
    CodecError, CredentialCodec, CredentialRecord, EventCodec, EventRecord, LineCodec,
};
pub use digest::PasswordDigest;
pub use fields::{
    check_password, Description, EventName, Username, Venue, DESCRIPTION_MAX_WORDS, NAME_MAX_LEN,
    SECRET_MAX_LEN, SECRET_MIN_LEN, VENUES,
};
pub use stamp::{days_in_month, is_leap, Stamp, StampError};
pub use validation::ValidationError;

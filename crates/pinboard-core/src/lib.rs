//! Typed domain records for the pinboard event bulletin.
//!
//! This crate provides:
//! - `Credential` and `Event`, the typed forms of the two stored records,
//!   with re-validating conversions to and from their wire records
//! - `Session`, the explicit acting identity (visitor or organizer)
//!
//! Core invariants:
//! - Event names are a single flat namespace across all venues
//! - Credentials are append-only evidence of signup; digests are one-way
//! - Identity is a value passed to operations, never ambient state
//!
#![deny(missing_docs)]

/// Stored username/digest pairs.
pub mod credential;
/// Typed event records.
pub mod event;
/// The acting identity.
pub mod session;

pub use credential::Credential;
pub use event::{Event, EventParseError};
pub use session::Session;

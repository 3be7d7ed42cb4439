//! Stores and services for the pinboard event bulletin.
//!
//! This crate provides:
//! - `CredentialStore` and `EventStore`, the two file-backed stores
//! - An event filtering API and the owner-first venue board view
//! - `ScheduleValidator`, the validation pipeline for proposed events
//! - `Registrar`, signup/login/logout producing explicit sessions
//! - `Bulletin`, the facade exposing the full operation surface
//!
//! Both stores follow the same model: load everything, compute, append for
//! new records, rewrite-all for removals. That model is isolated behind
//! these types so an indexed backend could replace the flat files without
//! changing callers.
//!
#![deny(missing_docs)]

/// The bulletin facade.
pub mod bulletin;
/// File-backed credential store.
pub mod credentials;
/// Error types for store operations.
pub mod error;
/// File-backed event store.
pub mod events;
/// Event filtering API.
pub mod filter;
/// Signup and login.
pub mod registrar;
/// Schedule validation.
pub mod schedule;
/// The venue board view.
pub mod view;

pub use bulletin::{Bulletin, DeleteError, CREDENTIALS_FILE, EVENTS_FILE};
pub use credentials::CredentialStore;
pub use error::StoreError;
pub use events::EventStore;
pub use filter::{AndFilter, EventFilter, OwnerFilter, UpcomingFilter, VenueFilter};
pub use registrar::{AuthError, Registrar};
pub use schedule::{ClashPolicy, EventFields, ScheduleError, ScheduleValidator};
pub use view::venue_board;

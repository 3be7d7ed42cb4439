//! Schedule validation for proposed events.

use crate::error::StoreError;
use crate::events::EventStore;
use pinboard_core::{Event, Session};
use pinboard_record::{Description, EventName, Stamp, StampError, ValidationError, Venue};
use thiserror::Error;

/// How a stamp clash with an existing event is handled.
///
/// A clash is a soft failure: the first pass rejects with
/// [`ScheduleError::ScheduleClash`] so the organizer can be asked, and a
/// second pass with [`ClashPolicy::Override`] proceeds anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClashPolicy {
    /// Reject proposals whose stamp matches any existing event's.
    Reject,
    /// Accept a clashing stamp (the organizer confirmed).
    Override,
}

/// Errors produced when validating a proposed event.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A required field is empty.
    #[error("please fill all entries: {field} is empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },
    /// The name, venue, or description breaks a charset or length rule.
    #[error(transparent)]
    Field(#[from] ValidationError),
    /// The date or time text is invalid.
    #[error(transparent)]
    Stamp(#[from] StampError),
    /// The proposed timing is before the current timing.
    #[error("event timing {stamp} is before the current timing")]
    EventInPast {
        /// The rejected stamp.
        stamp: Stamp,
    },
    /// The trimmed name is already taken by an event at any venue.
    #[error("event name '{name}' is already taken")]
    NameTaken {
        /// The taken name.
        name: String,
    },
    /// Another event has the exact same stamp (soft; may be overridden).
    #[error("event timing clashes with '{with}'")]
    ScheduleClash {
        /// Name of the clashing event.
        with: String,
        /// The shared stamp.
        stamp: Stamp,
    },
    /// The event store could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The raw field texts of a proposed event, as collected from the caller.
#[derive(Debug, Clone)]
pub struct EventFields {
    /// Proposed event name.
    pub name: String,
    /// Venue the event would be attached to.
    pub venue: String,
    /// Date text, `DD/MM/YYYY`.
    pub date: String,
    /// Time text, `HH:MM`.
    pub time: String,
    /// Free-text description.
    pub description: String,
}

/// Validates proposed event fields against syntax, calendar, and store
/// state, producing a ready-to-persist [`Event`] on success.
pub struct ScheduleValidator<'a> {
    events: &'a EventStore,
}

impl<'a> ScheduleValidator<'a> {
    /// Creates a validator over the given event store.
    pub fn new(events: &'a EventStore) -> Self {
        Self { events }
    }

    /// Runs the full validation pipeline.
    ///
    /// Check order: empty fields, then date, then time, then the
    /// not-in-the-past rule, then the remaining field syntax, and only
    /// then the two store-backed checks (name uniqueness across all
    /// venues, stamp clash anywhere). Purely syntactic rejections never
    /// touch the store.
    pub fn validate(
        &self,
        fields: &EventFields,
        session: &Session,
        now: Stamp,
        policy: ClashPolicy,
    ) -> Result<Event, ScheduleError> {
        for (field, value) in [
            ("name", &fields.name),
            ("date", &fields.date),
            ("time", &fields.time),
            ("description", &fields.description),
            ("venue", &fields.venue),
        ] {
            if value.is_empty() {
                return Err(ScheduleError::EmptyField { field });
            }
        }

        let stamp = Stamp::parse(&fields.date, &fields.time)?;
        if stamp < now {
            return Err(ScheduleError::EventInPast { stamp });
        }

        let name = EventName::parse(&fields.name)?;
        let venue = Venue::parse(fields.venue.clone())?;
        let description = Description::parse(fields.description.clone())?;

        let existing = self.events.load_all()?;
        if existing.iter().any(|event| event.name == name) {
            return Err(ScheduleError::NameTaken {
                name: name.as_ref().to_string(),
            });
        }
        if policy == ClashPolicy::Reject {
            if let Some(clash) = existing.iter().find(|event| event.stamp == stamp) {
                return Err(ScheduleError::ScheduleClash {
                    with: clash.name.as_ref().to_string(),
                    stamp,
                });
            }
        }

        Ok(Event {
            name,
            venue,
            owner: session.username().cloned(),
            stamp,
            description,
        })
    }
}

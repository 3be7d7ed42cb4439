use pinboard_record::{
    Description, EventName, EventRecord, Stamp, StampError, Username, ValidationError, Venue,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error that can occur when parsing a wire record into a typed event.
#[derive(Debug, Error)]
pub enum EventParseError {
    /// A field failed its charset or length rule.
    #[error(transparent)]
    Field(#[from] ValidationError),
    /// The timestamp text is not a valid date or time.
    #[error(transparent)]
    Stamp(#[from] StampError),
}

/// A scheduled event attached to a campus landmark.
///
/// `name` is the event's key: globally unique across all venues, because
/// the storage namespace is flat and deletion addresses events by name
/// alone. `owner` is absent only for records written without an organizer
/// identity; the validated creation path always supplies one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (globally unique key).
    pub name: EventName,
    /// Venue the event is attached to.
    pub venue: Venue,
    /// Username of the organizer who created the event.
    pub owner: Option<Username>,
    /// When the event takes place, minute precision.
    pub stamp: Stamp,
    /// Free-text description (may span lines).
    pub description: Description,
}

impl Event {
    /// Returns whether the event is at or after `now`. Listings keep
    /// upcoming events and hide past ones; only `sweep` removes them.
    pub fn is_upcoming(&self, now: Stamp) -> bool {
        self.stamp >= now
    }

    /// Converts to the string-level wire record.
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            name: self.name.as_ref().to_string(),
            venue: self.venue.as_ref().to_string(),
            owner: self
                .owner
                .as_ref()
                .map(|u| u.as_ref().to_string())
                .unwrap_or_default(),
            stamp: self.stamp.render(),
            description: self.description.as_ref().to_string(),
        }
    }

    /// Parses a wire record, re-validating every field. An empty owner
    /// field decodes as `None`.
    pub fn from_record(record: &EventRecord) -> Result<Self, EventParseError> {
        let owner = if record.owner.is_empty() {
            None
        } else {
            Some(Username::parse(record.owner.clone())?)
        };
        Ok(Self {
            name: EventName::parse(&record.name)?,
            venue: Venue::parse(record.venue.clone())?,
            owner,
            stamp: Stamp::parse_text(&record.stamp)?,
            description: Description::parse(record.description.clone())?,
        })
    }
}

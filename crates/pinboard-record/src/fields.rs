//! Validated field primitives for credential and event records.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codec::FIELD_SEPARATOR;
use crate::validation::ValidationError;

/// Minimum username and password length.
pub const SECRET_MIN_LEN: usize = 4;
/// Maximum username and password length.
pub const SECRET_MAX_LEN: usize = 20;
/// Maximum event name length.
pub const NAME_MAX_LEN: usize = 30;
/// Maximum description length in whitespace-separated words.
pub const DESCRIPTION_MAX_WORDS: usize = 100;

/// The fixed set of campus landmarks events can be attached to.
pub const VENUES: [&str; 12] = [
    "Agora",
    "Samgatha",
    "Manogatha",
    "Kaapi",
    "Bageshri",
    "Shikharam",
    "Brindavani",
    "Tilang B",
    "Tilang A",
    "Tilang Mess",
    "Tilang Parking",
    "Main Parking",
];

/// Organizer account name (`[A-Za-z0-9@_]`, 4-20 chars). Unique key of the
/// credentials file and the owner field of event records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated username from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() < SECRET_MIN_LEN {
            return Err(ValidationError::TooShort {
                field: "username",
                len: s.len(),
                min: SECRET_MIN_LEN,
            });
        }
        if s.len() > SECRET_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                len: s.len(),
                max: SECRET_MAX_LEN,
            });
        }
        if !Regex::new(r"^[A-Za-z0-9@_]+$").expect("invalid regex").is_match(&s) {
            return Err(ValidationError::NotAllowed {
                field: "username",
                value: s,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks a raw password against the length and charset rules
/// (`[A-Za-z0-9@_$#*-]`, 4-20 chars). Raw passwords are transient: they are
/// hashed immediately and never stored, so there is no newtype for them.
pub fn check_password(raw: &str) -> Result<(), ValidationError> {
    if raw.len() < SECRET_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "password",
            len: raw.len(),
            min: SECRET_MIN_LEN,
        });
    }
    if raw.len() > SECRET_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "password",
            len: raw.len(),
            max: SECRET_MAX_LEN,
        });
    }
    if !Regex::new(r"^[A-Za-z0-9@_$#*-]+$")
        .expect("invalid regex")
        .is_match(raw)
    {
        return Err(ValidationError::NotAllowed {
            field: "password",
            value: raw.to_string(),
        });
    }
    Ok(())
}

/// Event name: trimmed, 1-30 chars, free of the record delimiter. Globally
/// unique key of the events file, across all venues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(String);

impl EventName {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated event name. Leading and trailing whitespace is
    /// trimmed so the stored key matches what uniqueness checks compare.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = value.as_ref().trim();
        if s.is_empty() {
            return Err(ValidationError::TooShort {
                field: "event name",
                len: 0,
                min: 1,
            });
        }
        if s.len() > NAME_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "event name",
                len: s.len(),
                max: NAME_MAX_LEN,
            });
        }
        if s.contains(FIELD_SEPARATOR) {
            return Err(ValidationError::NotAllowed {
                field: "event name",
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the fixed campus landmarks in [`VENUES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Venue(String);

impl Venue {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a venue, rejecting anything outside the known landmark set.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !VENUES.contains(&s.as_str()) {
            return Err(ValidationError::NotAllowed {
                field: "venue",
                value: s,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Venue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event description: at most 100 words, free of the record delimiter.
/// May contain newlines; the codec escapes them on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated description.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.contains(FIELD_SEPARATOR) {
            return Err(ValidationError::NotAllowed {
                field: "description",
                value: s,
            });
        }
        let words = s.split_whitespace().count();
        if words > DESCRIPTION_MAX_WORDS {
            return Err(ValidationError::TooManyWords {
                field: "description",
                words,
                max: DESCRIPTION_MAX_WORDS,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

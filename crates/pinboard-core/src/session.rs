use pinboard_record::Username;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// The acting identity, passed explicitly to every operation that needs it.
///
/// There is exactly one identity per interaction: the unauthenticated
/// visitor (read-only) or an organizer bound at login/signup. A session is
/// a plain value; operations receive a reference and never mutate it.
/// Login and signup return a fresh organizer session, logout returns the
/// visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// Unauthenticated, read-only identity.
    Visitor,
    /// Authenticated organizer.
    Organizer(Username),
}

impl Session {
    /// The organizer's username, if authenticated.
    pub fn username(&self) -> Option<&Username> {
        match self {
            Session::Visitor => None,
            Session::Organizer(username) => Some(username),
        }
    }

    /// Returns whether this session is an authenticated organizer.
    pub fn is_organizer(&self) -> bool {
        matches!(self, Session::Organizer(_))
    }

    /// Returns whether this session owns `event`.
    pub fn owns(&self, event: &Event) -> bool {
        match (self.username(), event.owner.as_ref()) {
            (Some(me), Some(owner)) => me == owner,
            _ => false,
        }
    }
}

//! Event filtering API for selective listing.

use pinboard_core::Event;
use pinboard_record::{Stamp, Username, Venue};

/// Trait for filtering events during listing.
pub trait EventFilter {
    /// Returns true if the event matches the filter criteria.
    fn matches(&self, event: &Event) -> bool;
}

/// Filter by venue.
#[derive(Debug, Clone)]
pub struct VenueFilter {
    /// Venue to match.
    pub venue: Venue,
}

impl EventFilter for VenueFilter {
    fn matches(&self, event: &Event) -> bool {
        event.venue == self.venue
    }
}

/// Filter by owner username.
#[derive(Debug, Clone)]
pub struct OwnerFilter {
    /// Owner to match. Ownerless records never match.
    pub owner: Username,
}

impl EventFilter for OwnerFilter {
    fn matches(&self, event: &Event) -> bool {
        event.owner.as_ref() == Some(&self.owner)
    }
}

/// Filter to events at or after a cutoff (the "upcoming" side of now).
#[derive(Debug, Clone)]
pub struct UpcomingFilter {
    /// Include events at or after this stamp.
    pub cutoff: Stamp,
}

impl EventFilter for UpcomingFilter {
    fn matches(&self, event: &Event) -> bool {
        event.is_upcoming(self.cutoff)
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for AndFilter {
    fn matches(&self, event: &Event) -> bool {
        self.filters.iter().all(|f| f.matches(event))
    }
}

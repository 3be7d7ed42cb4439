//! Board view: the ordered listing the bulletin UI renders for a venue.

use crate::error::StoreError;
use crate::events::EventStore;
use crate::filter::{EventFilter, OwnerFilter, UpcomingFilter};
use pinboard_core::{Event, Session};
use pinboard_record::{Stamp, Venue};

/// Builds the venue board for a session: the session's own events first,
/// then everyone else's, each group in ascending stamp order, with past
/// events dropped.
///
/// Ties on equal stamps keep file (insertion) order: the sort is stable
/// and the store does not deduplicate stamps. The now-cutoff is applied
/// after ordering so it cannot disturb relative order, and it only hides;
/// nothing is removed from storage here (that is `sweep`'s job).
pub fn venue_board(
    store: &EventStore,
    venue: &Venue,
    session: &Session,
    now: Stamp,
) -> Result<Vec<Event>, StoreError> {
    let events = store.list_by_venue(venue)?;

    let (mut owned, mut others): (Vec<Event>, Vec<Event>) = match session.username() {
        Some(username) => {
            let mine = OwnerFilter {
                owner: username.clone(),
            };
            events.into_iter().partition(|event| mine.matches(event))
        }
        None => (Vec::new(), events),
    };

    owned.sort_by_key(|event| event.stamp);
    others.sort_by_key(|event| event.stamp);

    let mut board = owned;
    board.append(&mut others);

    let upcoming = UpcomingFilter { cutoff: now };
    board.retain(|event| upcoming.matches(event));
    Ok(board)
}

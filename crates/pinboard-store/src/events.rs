//! File-backed event store.

use crate::error::StoreError;
use crate::filter::{EventFilter, VenueFilter};
use pinboard_core::Event;
use pinboard_ledger::{LedgerReader, LedgerWriter, ReadMode};
use pinboard_record::{EventCodec, Stamp, Venue};
use std::path::{Path, PathBuf};

/// Persistent store of event records, one pipe-delimited line per event,
/// keyed by event name across all venues.
///
/// Mutation discipline: `create` appends; `delete` and `sweep` rewrite the
/// whole file, because the flat format has no index to remove against.
/// Every operation re-reads the file; there is no cross-call cache.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Creates a store bound to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored event in file order. A missing file is an empty
    /// store.
    pub fn load_all(&self) -> Result<Vec<Event>, StoreError> {
        let records = LedgerReader::<EventCodec>::open(&self.path, ReadMode::Strict)?.read_all()?;
        records
            .iter()
            .map(|record| Event::from_record(record).map_err(StoreError::from))
            .collect()
    }

    /// Loads the events attached to `venue`, in file order.
    pub fn list_by_venue(&self, venue: &Venue) -> Result<Vec<Event>, StoreError> {
        let filter = VenueFilter {
            venue: venue.clone(),
        };
        let mut events = self.load_all()?;
        events.retain(|event| filter.matches(event));
        Ok(events)
    }

    /// Appends one event record.
    ///
    /// This operation performs no validation and will happily append a
    /// duplicate name or a clashing stamp; validation is the schedule
    /// validator's responsibility, one layer up.
    pub fn create(&self, event: &Event) -> Result<(), StoreError> {
        LedgerWriter::<EventCodec>::new(&self.path).append(&event.to_record())?;
        Ok(())
    }

    /// Removes the event whose name matches, rewriting the whole file.
    /// A no-op returning `false` when the name is absent.
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let events = self.load_all()?;
        let total = events.len();
        let kept: Vec<Event> = events
            .into_iter()
            .filter(|event| event.name.as_ref() != name)
            .collect();

        let removed = kept.len() != total;
        if removed {
            self.rewrite(&kept)?;
        }
        Ok(removed)
    }

    /// Removes every event strictly before `reference`, rewriting the
    /// whole file. Returns the number of events removed. Intended to run
    /// once per process start; running it again with the same reference
    /// changes nothing.
    pub fn sweep(&self, reference: Stamp) -> Result<usize, StoreError> {
        let events = self.load_all()?;
        let total = events.len();
        let kept: Vec<Event> = events
            .into_iter()
            .filter(|event| event.is_upcoming(reference))
            .collect();
        let removed = total - kept.len();
        if removed > 0 {
            self.rewrite(&kept)?;
        }
        Ok(removed)
    }

    fn rewrite(&self, events: &[Event]) -> Result<(), StoreError> {
        let records: Vec<_> = events.iter().map(Event::to_record).collect();
        LedgerWriter::<EventCodec>::new(&self.path).rewrite(&records)?;
        Ok(())
    }
}

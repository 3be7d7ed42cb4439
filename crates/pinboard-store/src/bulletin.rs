//! The bulletin facade: the operation surface the UI layer consumes.

use crate::credentials::CredentialStore;
use crate::error::StoreError;
use crate::events::EventStore;
use crate::registrar::{AuthError, Registrar};
use crate::schedule::{ClashPolicy, EventFields, ScheduleError, ScheduleValidator};
use crate::view::venue_board;
use pinboard_core::{Event, Session};
use pinboard_record::{Stamp, Venue};
use std::path::Path;
use thiserror::Error;

/// File name of the credential store inside a data directory.
pub const CREDENTIALS_FILE: &str = "credentials.txt";
/// File name of the event store inside a data directory.
pub const EVENTS_FILE: &str = "events.txt";

/// Errors produced when removing an event.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The session is an unauthenticated visitor.
    #[error("only a signed-in organizer can remove events")]
    NotSignedIn,
    /// The event exists but belongs to another organizer.
    #[error("event '{name}' belongs to another organizer")]
    NotOwner {
        /// Name of the event that was not removed.
        name: String,
    },
    /// The event store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The persistence-and-scheduling engine behind the bulletin UI.
///
/// All operations are synchronous and return typed results; none of them
/// print or prompt. Identity is the explicit [`Session`] argument, and
/// "now" is an explicit [`Stamp`] so callers (and tests) control time.
#[derive(Debug, Clone)]
pub struct Bulletin {
    credentials: CredentialStore,
    events: EventStore,
}

impl Bulletin {
    /// Opens the bulletin over `credentials.txt` and `events.txt` inside
    /// `data_dir`. Neither file needs to exist yet.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        let dir = data_dir.as_ref();
        Self {
            credentials: CredentialStore::new(dir.join(CREDENTIALS_FILE)),
            events: EventStore::new(dir.join(EVENTS_FILE)),
        }
    }

    /// The underlying credential store.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The underlying event store.
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Creates an account and signs it in.
    pub fn signup(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        Registrar::new(&self.credentials).signup(username, password)
    }

    /// Authenticates an account and signs it in.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        Registrar::new(&self.credentials).login(username, password)
    }

    /// Ends a session, returning the visitor identity.
    pub fn logout(&self, session: Session) -> Session {
        Registrar::new(&self.credentials).logout(session)
    }

    /// The venue board for a session: owned events first, each group in
    /// ascending stamp order, past events hidden (not deleted).
    pub fn list(
        &self,
        venue: &Venue,
        session: &Session,
        now: Stamp,
    ) -> Result<Vec<Event>, StoreError> {
        venue_board(&self.events, venue, session, now)
    }

    /// Validates proposed fields and persists the event. A stamp clash
    /// rejects with [`ScheduleError::ScheduleClash`]; the caller may then
    /// confirm through [`confirm_clash_and_create`](Self::confirm_clash_and_create).
    pub fn validate_and_create(
        &self,
        fields: &EventFields,
        session: &Session,
        now: Stamp,
    ) -> Result<Event, ScheduleError> {
        self.create_with_policy(fields, session, now, ClashPolicy::Reject)
    }

    /// The clash-override path: re-runs every check except the clash and
    /// persists the event.
    pub fn confirm_clash_and_create(
        &self,
        fields: &EventFields,
        session: &Session,
        now: Stamp,
    ) -> Result<Event, ScheduleError> {
        self.create_with_policy(fields, session, now, ClashPolicy::Override)
    }

    fn create_with_policy(
        &self,
        fields: &EventFields,
        session: &Session,
        now: Stamp,
        policy: ClashPolicy,
    ) -> Result<Event, ScheduleError> {
        let event = ScheduleValidator::new(&self.events).validate(fields, session, now, policy)?;
        self.events.create(&event)?;
        Ok(event)
    }

    /// Removes the named event if, and only if, the session owns it.
    ///
    /// The ownership gate lives here, on purpose: the store's `delete`
    /// removes unconditionally by name, and this facade is the caller
    /// responsible for authorization. An absent name is a silent no-op,
    /// matching the store.
    pub fn delete(&self, name: &str, session: &Session) -> Result<(), DeleteError> {
        if !session.is_organizer() {
            return Err(DeleteError::NotSignedIn);
        }

        let trimmed = name.trim();
        let target = self
            .events
            .load_all()
            .map_err(DeleteError::Store)?
            .into_iter()
            .find(|event| event.name.as_ref() == trimmed);

        let Some(event) = target else {
            return Ok(());
        };
        if !session.owns(&event) {
            return Err(DeleteError::NotOwner {
                name: event.name.as_ref().to_string(),
            });
        }

        self.events.delete(trimmed).map_err(DeleteError::Store)?;
        Ok(())
    }

    /// Physically removes every event strictly before `now` from storage.
    /// Returns the number removed. Intended to run once per process start.
    pub fn sweep(&self, now: Stamp) -> Result<usize, StoreError> {
        self.events.sweep(now)
    }
}

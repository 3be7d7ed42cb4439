//! Signup and login against the credential store.

use crate::credentials::CredentialStore;
use crate::error::StoreError;
use pinboard_core::{Credential, Session};
use pinboard_record::{check_password, Username, ValidationError};
use thiserror::Error;

/// Errors produced by signup and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username or password breaks a length or charset rule.
    #[error(transparent)]
    Rule(#[from] ValidationError),
    /// Signup with a username that already exists.
    #[error("username '{username}' is already taken")]
    UsernameTaken {
        /// The taken username.
        username: String,
    },
    /// Login with a username that does not exist.
    #[error("username '{username}' does not exist")]
    UnknownUser {
        /// The unknown username.
        username: String,
    },
    /// Login with the wrong password for an existing username.
    #[error("incorrect password")]
    WrongPassword,
    /// The credential store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Creates accounts and authenticates organizers.
///
/// Successful operations return a fresh [`Session`] value; nothing here
/// mutates ambient state. Failed logins distinguish an unknown username
/// from a wrong password so the caller can render a specific message.
pub struct Registrar<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> Registrar<'a> {
    /// Creates a registrar over the given credential store.
    pub fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    /// Creates an account: rule checks, then uniqueness, then append.
    /// Returns the new organizer session.
    pub fn signup(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = Username::parse(username)?;
        check_password(password)?;

        if self.credentials.lookup(username.as_ref())?.is_some() {
            return Err(AuthError::UsernameTaken {
                username: username.as_ref().to_string(),
            });
        }

        let credential = Credential::new(username.clone(), password);
        self.credentials.append(&credential)?;
        Ok(Session::Organizer(username))
    }

    /// Authenticates an account and returns its organizer session.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = Username::parse(username)?;
        check_password(password)?;

        match self.credentials.lookup(username.as_ref())? {
            None => Err(AuthError::UnknownUser {
                username: username.as_ref().to_string(),
            }),
            Some(credential) if credential.verify(password) => Ok(Session::Organizer(username)),
            Some(_) => Err(AuthError::WrongPassword),
        }
    }

    /// Ends a session. Always succeeds and always returns the visitor.
    pub fn logout(&self, _session: Session) -> Session {
        Session::Visitor
    }
}

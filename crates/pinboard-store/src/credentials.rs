//! File-backed credential store.

use crate::error::StoreError;
use pinboard_core::Credential;
use pinboard_ledger::{LedgerReader, LedgerWriter, ReadMode};
use pinboard_record::CredentialCodec;
use std::path::{Path, PathBuf};

/// Persistent store of username/digest pairs, one `username:digest` line
/// per account.
///
/// Every operation re-reads the file, so results always reflect the latest
/// durable state; there is no cross-call cache. Reads are strict: a
/// malformed stored line aborts the operation rather than hiding an
/// account (see the ledger's read modes).
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
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

    /// Loads every stored credential. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Credential>, StoreError> {
        let records =
            LedgerReader::<CredentialCodec>::open(&self.path, ReadMode::Strict)?.read_all()?;
        records
            .iter()
            .map(|record| Credential::from_record(record).map_err(StoreError::from))
            .collect()
    }

    /// Finds the credential for `username`, if any.
    pub fn lookup(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|c| c.username.as_ref() == username))
    }

    /// Appends one credential line.
    ///
    /// No uniqueness check happens here; callers verify the username is
    /// free before appending (the signup flow does).
    pub fn append(&self, credential: &Credential) -> Result<(), StoreError> {
        LedgerWriter::<CredentialCodec>::new(&self.path).append(&credential.to_record())?;
        Ok(())
    }

    /// Returns whether `raw_password` matches the stored digest for
    /// `username`. Unknown usernames verify as `false`.
    pub fn verify(&self, username: &str, raw_password: &str) -> Result<bool, StoreError> {
        Ok(self
            .lookup(username)?
            .map(|c| c.verify(raw_password))
            .unwrap_or(false))
    }
}

use pinboard_record::{CredentialRecord, PasswordDigest, Username, ValidationError};
use serde::{Deserialize, Serialize};

/// A stored username/digest pair.
///
/// Credentials are created on signup and never mutated or deleted. The
/// digest is one-way: the only operation against it is [`verify`](Self::verify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Account name (unique key of the credentials file).
    pub username: Username,
    /// One-way digest of the account's password.
    pub digest: PasswordDigest,
}

impl Credential {
    /// Builds a credential for a new account by hashing the raw password.
    pub fn new(username: Username, raw_password: &str) -> Self {
        Self {
            username,
            digest: PasswordDigest::compute(raw_password),
        }
    }

    /// Returns whether `raw_password` hashes to the stored digest.
    pub fn verify(&self, raw_password: &str) -> bool {
        self.digest.matches(raw_password)
    }

    /// Converts to the string-level wire record.
    pub fn to_record(&self) -> CredentialRecord {
        CredentialRecord {
            username: self.username.as_ref().to_string(),
            digest: self.digest.as_ref().to_string(),
        }
    }

    /// Parses a wire record, re-validating both fields.
    pub fn from_record(record: &CredentialRecord) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::parse(record.username.clone())?,
            digest: PasswordDigest::parse(record.digest.clone())?,
        })
    }
}

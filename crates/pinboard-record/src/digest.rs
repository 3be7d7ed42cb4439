use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::validation::ValidationError;

/// One-way digest of a raw password: SHA-512, encoded as 128 lowercase hex
/// characters. The raw password is never stored and never recovered; the
/// only supported operation is recomputing and comparing byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a raw password.
    pub fn compute(raw: &str) -> Self {
        Self(hex::encode(Sha512::digest(raw.as_bytes())))
    }

    /// Parses a stored digest, rejecting anything that is not 128 lowercase
    /// hex characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(r"^[0-9a-f]{128}$")
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::NotAllowed {
                field: "password digest",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Returns whether `raw` hashes to this digest. Case-sensitive
    /// comparison on the hex form.
    pub fn matches(&self, raw: &str) -> bool {
        Self::compute(raw).0 == self.0
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use super::ValidationError;
use crate::crypto::hash::{hash_hex, hasher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a rendered token: 32 digest bytes as lowercase hex.
pub const TOKEN_HEX_LEN: usize = 64;

/// Literal appended to a vault token before hashing it into a share token.
///
/// The colon never occurs in a hex token, so share preimages cannot collide
/// with vault preimages.
pub const SHARE_SUFFIX: &str = ":share";

fn check_hex_token(kind: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.len() != TOKEN_HEX_LEN {
        return Err(ValidationError::MalformedToken {
            kind,
            reason: format!("expected {TOKEN_HEX_LEN} characters, got {}", value.len()),
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_digit() || ('a'..='f').contains(c)))
    {
        return Err(ValidationError::MalformedToken {
            kind,
            reason: format!("unexpected character {bad:?}, only lowercase hex is allowed"),
        });
    }
    Ok(())
}

/// Partition key of a vault: SHA-256 of the normalized secret phrase.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VaultToken(String);

impl VaultToken {
    /// Parse a token received from outside (URL, clipboard, storage).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        check_hex_token("vault", value)?;
        Ok(Self(value.to_string()))
    }

    pub(crate) fn from_digest_hex(hex: String) -> Self {
        debug_assert_eq!(hex.len(), TOKEN_HEX_LEN);
        Self(hex)
    }

    /// Borrow the hex rendering.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

// Tokens are bearer credentials, keep them out of debug output.
impl fmt::Debug for VaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaultToken({}…)", self.short())
    }
}

impl fmt::Display for VaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VaultToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VaultToken {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_hex_token("vault", &value)?;
        Ok(Self(value))
    }
}

impl From<VaultToken> for String {
    fn from(token: VaultToken) -> Self {
        token.0
    }
}

/// Read-only capability derived one-way from a vault token.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShareToken(String);

impl ShareToken {
    /// Parse a share token taken from a share link.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        check_hex_token("share", value)?;
        Ok(Self(value.to_string()))
    }

    /// Borrow the hex rendering.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Debug for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShareToken({}…)", self.short())
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShareToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShareToken {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_hex_token("share", &value)?;
        Ok(Self(value))
    }
}

impl From<ShareToken> for String {
    fn from(token: ShareToken) -> Self {
        token.0
    }
}

/// Derive the share token for a vault: `SHA256(vault + ":share")`.
pub fn derive_share_token(vault: &VaultToken) -> ShareToken {
    let mut h = hasher();
    h.update(vault.as_str().as_bytes());
    h.update(SHARE_SUFFIX.as_bytes());
    ShareToken(hex::encode(h.finalize()))
}

//! Strongly-typed identifier value objects.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Length in bytes of every hash-derived identifier.
pub const UNIQUE_ID_LENGTH: usize = 32;

/// Locally assigned identifier of a contact.
///
/// Always strictly positive; zero and negative values never name a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i32);

impl ContactId {
    /// Creates a ContactId, rejecting non-positive values.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::out_of_range("contactId", 1, i32::MAX, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw integer.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::invalid_format("contactId", "not an integer"))?;
        Self::new(value)
    }
}

/// Raw 32-byte identifier shared by authors, groups and messages.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueId([u8; UNIQUE_ID_LENGTH]);

impl UniqueId {
    /// Wraps raw bytes.
    pub fn from_bytes(bytes: [u8; UNIQUE_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an id from a slice, which must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let array: [u8; UNIQUE_ID_LENGTH] = bytes.try_into().map_err(|_| {
            ValidationError::invalid_format(
                "id",
                format!("expected {} bytes, got {}", UNIQUE_ID_LENGTH, bytes.len()),
            )
        })?;
        Ok(Self(array))
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; UNIQUE_ID_LENGTH] {
        &self.0
    }

    /// Base64 rendering used on the wire.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl fmt::Debug for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueId({})", self.to_base64())
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

/// Identifier of an author (hash of its public identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(UniqueId);

impl AuthorId {
    pub fn new(id: UniqueId) -> Self {
        Self(id)
    }

    pub fn unique_id(&self) -> &UniqueId {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a message group (one per contact conversation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(UniqueId);

impl GroupId {
    pub fn new(id: UniqueId) -> Self {
        Self(id)
    }

    pub fn unique_id(&self) -> &UniqueId {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(UniqueId);

impl MessageId {
    pub fn new(id: UniqueId) -> Self {
        Self(id)
    }

    pub fn unique_id(&self) -> &UniqueId {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_rejects_zero_and_negative() {
        assert!(ContactId::new(0).is_err());
        assert!(ContactId::new(-3).is_err());
        assert_eq!(ContactId::new(7).unwrap().as_i32(), 7);
    }

    #[test]
    fn contact_id_parses_from_path_segment() {
        let id: ContactId = "42".parse().unwrap();
        assert_eq!(id.as_i32(), 42);
        assert!("abc".parse::<ContactId>().is_err());
        assert!("0".parse::<ContactId>().is_err());
    }

    #[test]
    fn unique_id_requires_exact_length() {
        assert!(UniqueId::from_slice(&[0u8; 31]).is_err());
        assert!(UniqueId::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn unique_id_renders_as_base64() {
        let id = UniqueId::from_bytes([0u8; UNIQUE_ID_LENGTH]);
        assert_eq!(id.to_base64(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
        assert_eq!(id.to_string(), id.to_base64());
    }
}

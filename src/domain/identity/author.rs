//! Author entity.
//!
//! An author is the public half of a peer identity: a display name bound to
//! a signature public key. Its id is derived from both, so two authors with
//! the same name but different keys never collide.

use sha2::{Digest, Sha256};

use crate::domain::foundation::{AuthorId, UniqueId, ValidationError};

/// Current author encoding version.
pub const AUTHOR_FORMAT_VERSION: i32 = 1;

/// Maximum length of an author name, in UTF-8 bytes.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 50;

/// Maximum length of an author public key, in bytes.
pub const MAX_PUBLIC_KEY_LENGTH: usize = 32;

const AUTHOR_ID_LABEL: &[u8] = b"courier/AUTHOR_ID";

/// Public identity of a peer.
///
/// # Invariants
///
/// - `name` is 1-50 UTF-8 bytes
/// - `public_key` is 1-32 bytes
/// - `id` is the hash of label, format version, name and public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    format_version: i32,
    name: String,
    public_key: Vec<u8>,
}

impl Author {
    /// Creates an author, deriving its id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` if the name or key is out of bounds
    pub fn new(name: impl Into<String>, public_key: Vec<u8>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Self::validate_public_key(&public_key)?;

        let id = Self::derive_id(AUTHOR_FORMAT_VERSION, &name, &public_key);
        Ok(Self {
            id,
            format_version: AUTHOR_FORMAT_VERSION,
            name,
            public_key,
        })
    }

    /// Reconstitute an author from storage (no validation, id kept as stored).
    pub fn reconstitute(id: AuthorId, format_version: i32, name: String, public_key: Vec<u8>) -> Self {
        Self {
            id,
            format_version,
            name,
            public_key,
        }
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn format_version(&self) -> i32 {
        self.format_version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn derive_id(format_version: i32, name: &str, public_key: &[u8]) -> AuthorId {
        let mut hasher = Sha256::new();
        hasher.update(AUTHOR_ID_LABEL);
        hasher.update(format_version.to_be_bytes());
        hasher.update((name.len() as u32).to_be_bytes());
        hasher.update(name.as_bytes());
        hasher.update(public_key);
        AuthorId::new(UniqueId::from_bytes(hasher.finalize().into()))
    }

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > MAX_AUTHOR_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_AUTHOR_NAME_LENGTH, name.len()));
        }
        Ok(())
    }

    fn validate_public_key(key: &[u8]) -> Result<(), ValidationError> {
        if key.is_empty() {
            return Err(ValidationError::empty_field("publicKey"));
        }
        if key.len() > MAX_PUBLIC_KEY_LENGTH {
            return Err(ValidationError::too_long("publicKey", MAX_PUBLIC_KEY_LENGTH, key.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_author_derives_stable_id() {
        let a = Author::new("Alice", vec![1; 32]).unwrap();
        let b = Author::new("Alice", vec![1; 32]).unwrap();
        assert_eq!(a.id(), b.id());
        assert_eq!(a.format_version(), AUTHOR_FORMAT_VERSION);
    }

    #[test]
    fn different_keys_give_different_ids() {
        let a = Author::new("Alice", vec![1; 32]).unwrap();
        let b = Author::new("Alice", vec![2; 32]).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            Author::new("", vec![1; 32]),
            Err(ValidationError::empty_field("name"))
        );
    }

    #[test]
    fn rejects_name_over_fifty_bytes() {
        let name = "é".repeat(26);
        assert!(matches!(
            Author::new(name, vec![1; 32]),
            Err(ValidationError::TooLong { max: 50, actual: 52, .. })
        ));
    }

    #[test]
    fn rejects_oversized_public_key() {
        assert!(Author::new("Bob", vec![0; 33]).is_err());
        assert!(Author::new("Bob", vec![]).is_err());
    }
}

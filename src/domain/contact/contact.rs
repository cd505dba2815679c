//! Contact snapshot.

use crate::domain::foundation::{AuthorId, ContactId};
use crate::domain::identity::Author;

/// A peer the local identity has added.
///
/// # Invariants
///
/// - `alias` is `None` when unset. `Some("")` is a set, empty alias.
/// - `handshake_public_key` is `None` for contacts added before handshake
///   keys were exchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    author: Author,
    local_author_id: AuthorId,
    alias: Option<String>,
    handshake_public_key: Option<Vec<u8>>,
    verified: bool,
}

impl Contact {
    /// Creates a contact with no alias and no handshake key.
    pub fn new(id: ContactId, author: Author, local_author_id: AuthorId, verified: bool) -> Self {
        Self {
            id,
            author,
            local_author_id,
            alias: None,
            handshake_public_key: None,
            verified,
        }
    }

    /// Sets the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the handshake public key.
    pub fn with_handshake_public_key(mut self, key: Vec<u8>) -> Self {
        self.handshake_public_key = Some(key);
        self
    }

    /// Replaces the alias. Only the contact-management collaborator calls this.
    pub fn set_alias(&mut self, alias: Option<String>) {
        self.alias = alias;
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// The local identity this contact belongs to.
    pub fn local_author_id(&self) -> &AuthorId {
        &self.local_author_id
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn handshake_public_key(&self) -> Option<&[u8]> {
        self.handshake_public_key.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

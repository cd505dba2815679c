//! In-memory contact store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::contact::{Contact, ContactAddedEvent};
use crate::domain::foundation::{AuthorId, ContactId, DomainError, ErrorCode};
use crate::domain::identity::Author;
use crate::ports::{ContactListener, ContactManager};

use super::poisoned;

struct Inner {
    contacts: BTreeMap<ContactId, Contact>,
    // None once every positive i32 has been handed out.
    next_id: Option<ContactId>,
}

/// Contact store for a single local identity.
///
/// Ids are assigned sequentially from 1 and never reused.
pub struct InMemoryContactStore {
    local_author_id: AuthorId,
    inner: RwLock<Inner>,
    listeners: RwLock<Vec<Arc<dyn ContactListener>>>,
}

impl InMemoryContactStore {
    pub fn new(local_author_id: AuthorId) -> Self {
        Self {
            local_author_id,
            inner: RwLock::new(Inner {
                contacts: BTreeMap::new(),
                next_id: ContactId::new(1).ok(),
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Registers a listener for contact additions.
    pub fn add_listener(&self, listener: Arc<dyn ContactListener>) -> Result<(), DomainError> {
        self.listeners.write().map_err(poisoned)?.push(listener);
        Ok(())
    }

    /// Admits a new contact and notifies listeners.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the author is the local identity or already a contact
    /// - `StorageError` if contact ids are exhausted
    pub fn add_contact(&self, author: Author, verified: bool) -> Result<ContactAddedEvent, DomainError> {
        self.insert(author, verified, |contact| contact)
    }

    /// Admits a new contact after applying `configure` to it (alias, handshake key).
    pub fn add_contact_with(
        &self,
        author: Author,
        verified: bool,
        configure: impl FnOnce(Contact) -> Contact,
    ) -> Result<ContactAddedEvent, DomainError> {
        self.insert(author, verified, configure)
    }

    /// Sets or clears a contact's alias.
    pub fn set_alias(&self, id: ContactId, alias: Option<String>) -> Result<(), DomainError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner
            .contacts
            .get_mut(&id)
            .ok_or_else(|| not_found(id))?
            .set_alias(alias);
        Ok(())
    }

    fn insert(
        &self,
        author: Author,
        verified: bool,
        configure: impl FnOnce(Contact) -> Contact,
    ) -> Result<ContactAddedEvent, DomainError> {
        if *author.id() == self.local_author_id {
            return Err(DomainError::validation("author", "Cannot add the local identity as a contact"));
        }

        let event = {
            let mut inner = self.inner.write().map_err(poisoned)?;
            if inner.contacts.values().any(|c| c.author().id() == author.id()) {
                return Err(DomainError::validation("author", "Contact already exists"));
            }

            let id = inner.next_id.ok_or_else(|| {
                DomainError::new(ErrorCode::StorageError, "No contact ids left")
            })?;
            inner.next_id = id
                .as_i32()
                .checked_add(1)
                .and_then(|next| ContactId::new(next).ok());

            let contact = configure(Contact::new(id, author, self.local_author_id, verified));
            inner.contacts.insert(id, contact);
            ContactAddedEvent::new(id, verified)
        };

        tracing::debug!(contact_id = %event.contact_id(), verified, "Contact added");

        let listeners = self.listeners.read().map_err(poisoned)?.clone();
        for listener in listeners {
            listener.contact_added(&event);
        }
        Ok(event)
    }
}

fn not_found(id: ContactId) -> DomainError {
    DomainError::new(ErrorCode::ContactNotFound, format!("Contact not found: {}", id))
        .with_detail("contactId", id.to_string())
}

#[async_trait]
impl ContactManager for InMemoryContactStore {
    async fn get_contact(&self, id: ContactId) -> Result<Contact, DomainError> {
        self.inner
            .read()
            .map_err(poisoned)?
            .contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        Ok(self
            .inner
            .read()
            .map_err(poisoned)?
            .contacts
            .values()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn local() -> Author {
        Author::new("Me", vec![1; 32]).unwrap()
    }

    fn author(name: &str, key: u8) -> Author {
        Author::new(name, vec![key; 32]).unwrap()
    }

    #[derive(Default)]
    struct RecordingListener {
        events: Mutex<Vec<ContactAddedEvent>>,
    }

    impl ContactListener for RecordingListener {
        fn contact_added(&self, event: &ContactAddedEvent) {
            self.events.lock().unwrap().push(*event);
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = InMemoryContactStore::new(*local().id());
        let first = store.add_contact(author("A", 2), false).unwrap();
        let second = store.add_contact(author("B", 3), true).unwrap();

        assert_eq!(first.contact_id().as_i32(), 1);
        assert_eq!(second.contact_id().as_i32(), 2);
        assert!(second.is_verified());
        assert_eq!(store.get_contacts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn last_contact_id_is_usable_then_ids_run_out() {
        let store = InMemoryContactStore::new(*local().id());
        store.inner.write().unwrap().next_id = ContactId::new(i32::MAX).ok();

        let last = store.add_contact(author("A", 2), false).unwrap();
        assert_eq!(last.contact_id().as_i32(), i32::MAX);

        let err = store.add_contact(author("B", 3), false).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(store.get_contacts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_contact_is_not_found() {
        let store = InMemoryContactStore::new(*local().id());
        let err = store.get_contact(ContactId::new(9).unwrap()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContactNotFound);
    }

    #[test]
    fn rejects_duplicate_and_self() {
        let me = local();
        let store = InMemoryContactStore::new(*me.id());
        store.add_contact(author("A", 2), false).unwrap();

        assert!(store.add_contact(author("A", 2), false).is_err());
        assert!(store.add_contact(me, false).is_err());
    }

    #[test]
    fn notifies_listeners() {
        let store = InMemoryContactStore::new(*local().id());
        let listener = Arc::new(RecordingListener::default());
        store.add_listener(listener.clone()).unwrap();

        let event = store.add_contact(author("A", 2), true).unwrap();
        assert_eq!(*listener.events.lock().unwrap(), vec![event]);
    }

    #[tokio::test]
    async fn alias_can_be_set_and_cleared() {
        let store = InMemoryContactStore::new(*local().id());
        let event = store
            .add_contact_with(author("A", 2), false, |c| c.with_handshake_public_key(vec![5]))
            .unwrap();
        let id = event.contact_id();

        store.set_alias(id, Some("Ann".to_string())).unwrap();
        let contact = store.get_contact(id).await.unwrap();
        assert_eq!(contact.alias(), Some("Ann"));
        assert_eq!(contact.handshake_public_key(), Some(&[5u8][..]));

        store.set_alias(id, None).unwrap();
        assert!(store.get_contact(id).await.unwrap().alias().is_none());
    }
}

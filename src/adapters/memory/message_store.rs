//! In-memory private message store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::contact::Contact;
use crate::domain::foundation::{
    ContactId, DomainError, ErrorCode, GroupId, MessageId, Timestamp, UniqueId,
};
use crate::domain::messaging::{GroupCount, MessageText, OutgoingPrivateMessage, PrivateMessageHeader};
use crate::ports::{ContactManager, ConversationManager, MessagingManager};

use super::poisoned;

const GROUP_ID_LABEL: &[u8] = b"courier/PRIVATE_GROUP_ID";
const MESSAGE_ID_LABEL: &[u8] = b"courier/MESSAGE_ID";

#[derive(Default)]
struct Inner {
    groups: HashMap<GroupId, Vec<PrivateMessageHeader>>,
    texts: HashMap<MessageId, String>,
}

/// Message store keyed by conversation group.
///
/// Outgoing messages are recorded as sent immediately; there is no transport
/// behind this adapter. Incoming messages are injected with
/// [`InMemoryMessageStore::receive_private_message`].
pub struct InMemoryMessageStore {
    contacts: Arc<dyn ContactManager>,
    inner: RwLock<Inner>,
}

impl InMemoryMessageStore {
    pub fn new(contacts: Arc<dyn ContactManager>) -> Self {
        Self {
            contacts,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Records a message received from `contact_id`.
    pub async fn receive_private_message(
        &self,
        contact_id: ContactId,
        timestamp: Timestamp,
        text: MessageText,
    ) -> Result<PrivateMessageHeader, DomainError> {
        let contact = self.contacts.get_contact(contact_id).await?;
        let group_id = group_id_for(&contact);
        let header = PrivateMessageHeader {
            id: message_id_for(&group_id, timestamp, text.as_str()),
            group_id,
            timestamp,
            local: false,
            read: false,
            sent: false,
            seen: false,
        };
        self.store(header.clone(), text)?;
        Ok(header)
    }

    fn store(&self, header: PrivateMessageHeader, text: MessageText) -> Result<(), DomainError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.texts.insert(header.id, text.into_inner());
        inner.groups.entry(header.group_id).or_default().push(header);
        Ok(())
    }

    async fn group_of(&self, contact_id: ContactId) -> Result<GroupId, DomainError> {
        let contact = self.contacts.get_contact(contact_id).await?;
        Ok(group_id_for(&contact))
    }
}

fn group_id_for(contact: &Contact) -> GroupId {
    let local = contact.local_author_id().unique_id();
    let remote = contact.author().id().unique_id();
    let (first, second) = if local < remote { (local, remote) } else { (remote, local) };

    let mut hasher = Sha256::new();
    hasher.update(GROUP_ID_LABEL);
    hasher.update(first.as_bytes());
    hasher.update(second.as_bytes());
    GroupId::new(UniqueId::from_bytes(hasher.finalize().into()))
}

fn message_id_for(group_id: &GroupId, timestamp: Timestamp, text: &str) -> MessageId {
    let mut hasher = Sha256::new();
    hasher.update(MESSAGE_ID_LABEL);
    hasher.update(group_id.unique_id().as_bytes());
    hasher.update(timestamp.as_millis().to_be_bytes());
    hasher.update(text.as_bytes());
    MessageId::new(UniqueId::from_bytes(hasher.finalize().into()))
}

#[async_trait]
impl ConversationManager for InMemoryMessageStore {
    async fn get_group_count(&self, contact_id: ContactId) -> Result<GroupCount, DomainError> {
        let group_id = self.group_of(contact_id).await?;
        let inner = self.inner.read().map_err(poisoned)?;

        let count = inner
            .groups
            .get(&group_id)
            .map(|headers| {
                headers.iter().fold(GroupCount::default(), |mut count, h| {
                    count.msg_count += 1;
                    if !h.read {
                        count.unread_count += 1;
                    }
                    count.latest_msg_time = count.latest_msg_time.max(h.timestamp);
                    count
                })
            })
            .unwrap_or_default();
        Ok(count)
    }

    async fn get_message_headers(
        &self,
        contact_id: ContactId,
    ) -> Result<Vec<PrivateMessageHeader>, DomainError> {
        let group_id = self.group_of(contact_id).await?;
        let inner = self.inner.read().map_err(poisoned)?;

        Ok(inner.groups.get(&group_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl MessagingManager for InMemoryMessageStore {
    async fn get_contact_group(&self, contact: &Contact) -> Result<GroupId, DomainError> {
        Ok(group_id_for(contact))
    }

    async fn get_message_text(&self, id: &MessageId) -> Result<Option<String>, DomainError> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner
            .texts
            .get(id)
            .map(|text| Some(text.clone()))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::MessageNotFound, format!("Message not found: {}", id))
            })
    }

    async fn send_private_message(
        &self,
        message: OutgoingPrivateMessage,
    ) -> Result<PrivateMessageHeader, DomainError> {
        let header = PrivateMessageHeader {
            id: message_id_for(&message.group_id, message.timestamp, message.text.as_str()),
            group_id: message.group_id,
            timestamp: message.timestamp,
            local: true,
            read: true,
            sent: true,
            seen: false,
        };
        self.store(header.clone(), message.text)?;

        tracing::debug!(message_id = %header.id, group_id = %header.group_id, "Private message stored");
        Ok(header)
    }
}

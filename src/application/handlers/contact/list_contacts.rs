//! ListContactsHandler - Query handler for the contact list.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::contact::Contact;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ContactManager, ConversationManager};

/// A contact paired with its latest conversation activity.
#[derive(Debug, Clone)]
pub struct ContactActivity {
    pub contact: Contact,
    /// `Timestamp::NONE` when no message was ever exchanged.
    pub latest_msg_time: Timestamp,
}

/// Errors that can occur when listing contacts.
#[derive(Debug, Clone, Error)]
pub enum ListContactsError {
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] DomainError),
}

/// Handler for listing all contacts.
pub struct ListContactsHandler {
    contacts: Arc<dyn ContactManager>,
    conversations: Arc<dyn ConversationManager>,
}

impl ListContactsHandler {
    pub fn new(contacts: Arc<dyn ContactManager>, conversations: Arc<dyn ConversationManager>) -> Self {
        Self {
            contacts,
            conversations,
        }
    }

    pub async fn handle(&self) -> Result<Vec<ContactActivity>, ListContactsError> {
        let contacts = self.contacts.get_contacts().await?;

        let mut items = Vec::with_capacity(contacts.len());
        for contact in contacts {
            let count = self.conversations.get_group_count(contact.id()).await?;
            items.push(ContactActivity {
                contact,
                latest_msg_time: count.latest_msg_time,
            });
        }
        Ok(items)
    }
}

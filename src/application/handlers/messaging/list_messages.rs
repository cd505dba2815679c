//! ListMessagesHandler - Query handler for one contact's conversation.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ContactId, DomainError};
use crate::domain::messaging::PrivateMessageHeader;
use crate::ports::{ContactManager, ConversationManager, MessagingManager};

/// Query for the messages exchanged with one contact.
#[derive(Debug, Clone, Copy)]
pub struct ListMessagesQuery {
    pub contact_id: ContactId,
}

/// A message header with its text loaded.
#[derive(Debug, Clone)]
pub struct LoadedMessage {
    pub header: PrivateMessageHeader,
    pub text: Option<String>,
}

/// Messages of one conversation, oldest first.
#[derive(Debug, Clone)]
pub struct MessageList {
    pub contact_id: ContactId,
    pub items: Vec<LoadedMessage>,
}

/// Errors that can occur when listing messages.
#[derive(Debug, Clone, Error)]
pub enum ListMessagesError {
    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("Collaborator error: {0}")]
    Collaborator(DomainError),
}

impl From<DomainError> for ListMessagesError {
    fn from(err: DomainError) -> Self {
        ListMessagesError::Collaborator(err)
    }
}

/// Handler for listing a contact's private messages.
pub struct ListMessagesHandler {
    contacts: Arc<dyn ContactManager>,
    conversations: Arc<dyn ConversationManager>,
    messaging: Arc<dyn MessagingManager>,
}

impl ListMessagesHandler {
    pub fn new(
        contacts: Arc<dyn ContactManager>,
        conversations: Arc<dyn ConversationManager>,
        messaging: Arc<dyn MessagingManager>,
    ) -> Self {
        Self {
            contacts,
            conversations,
            messaging,
        }
    }

    pub async fn handle(&self, query: ListMessagesQuery) -> Result<MessageList, ListMessagesError> {
        let contact = self.contacts.get_contact(query.contact_id).await.map_err(|e| {
            if e.code.is_not_found() {
                ListMessagesError::ContactNotFound(query.contact_id)
            } else {
                ListMessagesError::Collaborator(e)
            }
        })?;

        let mut headers = self.conversations.get_message_headers(contact.id()).await?;
        headers.sort_by_key(|h| h.timestamp);

        let mut items = Vec::with_capacity(headers.len());
        for header in headers {
            let text = self.messaging.get_message_text(&header.id).await?;
            items.push(LoadedMessage { header, text });
        }

        Ok(MessageList {
            contact_id: contact.id(),
            items,
        })
    }
}

//! WriteMessageHandler - Command handler for sending a private message.
//!
//! The handler validates the text, picks a timestamp that keeps the
//! conversation strictly ordered, and hands the message to the messaging
//! collaborator. Delivery (queueing, retries) is the collaborator's job.
//!
//! Writes to one conversation are serialized from reading the latest
//! message time until the send returns; other conversations proceed
//! concurrently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

use crate::domain::foundation::{ContactId, DomainError, ErrorCode, GroupId, ValidationError};
use crate::domain::messaging::{MessageText, OutgoingPrivateMessage, PrivateMessageHeader};
use crate::ports::{Clock, ContactManager, ConversationManager, MessagingManager};

/// Command to send a private message to a contact.
#[derive(Debug, Clone)]
pub struct WriteMessageCommand {
    pub contact_id: ContactId,
    pub text: String,
}

impl WriteMessageCommand {
    pub fn new(contact_id: ContactId, text: impl Into<String>) -> Self {
        Self {
            contact_id,
            text: text.into(),
        }
    }
}

/// Errors that can occur when writing a message.
#[derive(Debug, Clone, Error)]
pub enum WriteMessageError {
    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("Invalid message: {0}")]
    InvalidText(#[from] ValidationError),

    #[error("Collaborator error: {0}")]
    Collaborator(DomainError),
}

impl From<DomainError> for WriteMessageError {
    fn from(err: DomainError) -> Self {
        WriteMessageError::Collaborator(err)
    }
}

/// Result of writing a message.
#[derive(Debug, Clone)]
pub struct WriteMessageResult {
    pub contact_id: ContactId,
    pub header: PrivateMessageHeader,
    pub text: MessageText,
}

/// Handler for sending private messages.
pub struct WriteMessageHandler {
    contacts: Arc<dyn ContactManager>,
    conversations: Arc<dyn ConversationManager>,
    messaging: Arc<dyn MessagingManager>,
    clock: Arc<dyn Clock>,
    conversation_locks: Mutex<HashMap<GroupId, Arc<AsyncMutex<()>>>>,
}

impl WriteMessageHandler {
    pub fn new(
        contacts: Arc<dyn ContactManager>,
        conversations: Arc<dyn ConversationManager>,
        messaging: Arc<dyn MessagingManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contacts,
            conversations,
            messaging,
            clock,
            conversation_locks: Mutex::new(HashMap::new()),
        }
    }

    fn conversation_lock(&self, group_id: GroupId) -> Result<Arc<AsyncMutex<()>>, DomainError> {
        let mut locks = self.conversation_locks.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "Conversation lock table poisoned")
        })?;
        Ok(locks.entry(group_id).or_default().clone())
    }

    pub async fn handle(&self, cmd: WriteMessageCommand) -> Result<WriteMessageResult, WriteMessageError> {
        let contact = self.contacts.get_contact(cmd.contact_id).await.map_err(|e| {
            if e.code.is_not_found() {
                WriteMessageError::ContactNotFound(cmd.contact_id)
            } else {
                WriteMessageError::Collaborator(e)
            }
        })?;

        let text = MessageText::new(cmd.text)?;

        let group_id = self.messaging.get_contact_group(&contact).await?;
        let lock = self.conversation_lock(group_id)?;
        let _ordered = lock.lock().await;

        let count = self.conversations.get_group_count(contact.id()).await?;
        let timestamp = count.next_message_time(self.clock.now());

        let header = self
            .messaging
            .send_private_message(OutgoingPrivateMessage {
                group_id,
                timestamp,
                text: text.clone(),
            })
            .await?;

        tracing::info!(
            contact_id = %contact.id(),
            message_id = %header.id,
            timestamp = header.timestamp.as_millis(),
            "Private message submitted"
        );

        Ok(WriteMessageResult {
            contact_id: contact.id(),
            header,
            text,
        })
    }
}

//! ConversationManager port - per-contact conversation state.

use async_trait::async_trait;

use crate::domain::foundation::{ContactId, DomainError};
use crate::domain::messaging::{GroupCount, PrivateMessageHeader};

/// Port for reading conversation state.
#[async_trait]
pub trait ConversationManager: Send + Sync {
    /// Message counters for the contact's conversation.
    ///
    /// A contact without messages yields `GroupCount::default()`.
    async fn get_group_count(&self, contact_id: ContactId) -> Result<GroupCount, DomainError>;

    /// Message headers of the contact's conversation, in no particular order.
    async fn get_message_headers(
        &self,
        contact_id: ContactId,
    ) -> Result<Vec<PrivateMessageHeader>, DomainError>;
}

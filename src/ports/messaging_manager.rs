//! MessagingManager port - private message storage and sending.

use async_trait::async_trait;

use crate::domain::contact::Contact;
use crate::domain::foundation::{DomainError, GroupId, MessageId};
use crate::domain::messaging::{OutgoingPrivateMessage, PrivateMessageHeader};

/// Port for the private messaging collaborator.
///
/// The collaborator owns delivery: queueing, retries and ordering on the
/// wire are its responsibility once `send_private_message` returns.
#[async_trait]
pub trait MessagingManager: Send + Sync {
    /// Id of the private conversation group shared with `contact`.
    async fn get_contact_group(&self, contact: &Contact) -> Result<GroupId, DomainError>;

    /// Text of a stored message, or `None` if the text was deleted.
    ///
    /// # Errors
    ///
    /// - `MessageNotFound` if no message has this id
    async fn get_message_text(&self, id: &MessageId) -> Result<Option<String>, DomainError>;

    /// Stores a local message and queues it for delivery.
    ///
    /// Returns the header of the stored message.
    async fn send_private_message(
        &self,
        message: OutgoingPrivateMessage,
    ) -> Result<PrivateMessageHeader, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MessagingManager) {}
}

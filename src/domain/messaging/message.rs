//! Private message headers and conversation counters.

use crate::domain::foundation::{GroupId, MessageId, Timestamp};

use super::MessageText;

/// Metadata of one message in a contact's private conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessageHeader {
    pub id: MessageId,
    pub group_id: GroupId,
    pub timestamp: Timestamp,
    /// Written by the local identity.
    pub local: bool,
    pub read: bool,
    /// Delivered to the transport at least once.
    pub sent: bool,
    /// Acknowledged by the contact.
    pub seen: bool,
}

/// Message counters for one contact's conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupCount {
    pub msg_count: u32,
    pub unread_count: u32,
    /// `Timestamp::NONE` until the first message.
    pub latest_msg_time: Timestamp,
}

impl GroupCount {
    /// Timestamp for the next outgoing message: the current time, unless that
    /// would not sort after the latest message.
    pub fn next_message_time(&self, now: Timestamp) -> Timestamp {
        now.max(self.latest_msg_time.next())
    }
}

/// An outgoing message ready to be handed to the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPrivateMessage {
    pub group_id: GroupId,
    pub timestamp: Timestamp,
    pub text: MessageText,
}

//! Messaging module - private conversations with contacts.

mod message;
mod text;

pub use message::{GroupCount, OutgoingPrivateMessage, PrivateMessageHeader};
pub use text::{MessageText, MAX_PRIVATE_MESSAGE_TEXT_LENGTH};

//! Application handlers.
//!
//! Command and query handlers that orchestrate collaborator calls.

pub mod contact;
pub mod messaging;

pub use contact::{ContactActivity, ListContactsError, ListContactsHandler};
pub use messaging::{
    ListMessagesError, ListMessagesHandler, ListMessagesQuery, LoadedMessage, MessageList,
    WriteMessageCommand, WriteMessageError, WriteMessageHandler, WriteMessageResult,
};

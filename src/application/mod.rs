//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates collaborator calls for the HTTP controllers.
//! Queries (list contacts, list messages) never change node state; the one
//! command (write message) hands an outgoing message to the messaging
//! collaborator.

pub mod handlers;

pub use handlers::{
    ContactActivity, ListContactsError, ListContactsHandler, ListMessagesError,
    ListMessagesHandler, ListMessagesQuery, LoadedMessage, MessageList, WriteMessageCommand,
    WriteMessageError, WriteMessageHandler, WriteMessageResult,
};

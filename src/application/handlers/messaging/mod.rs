//! Private messaging command and query handlers.

mod list_messages;
mod write_message;

pub use list_messages::{
    ListMessagesError, ListMessagesHandler, ListMessagesQuery, LoadedMessage, MessageList,
};
pub use write_message::{
    WriteMessageCommand, WriteMessageError, WriteMessageHandler, WriteMessageResult,
};

//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the REST front-end and the messaging node behind it. Adapters implement
//! these ports.
//!
//! ## Node Ports
//!
//! - `ContactManager` - Contact lookup
//! - `ContactListener` - Notification of newly added contacts
//! - `ConversationManager` - Per-contact conversation state
//! - `MessagingManager` - Private message storage and sending
//!
//! ## Infrastructure Ports
//!
//! - `Clock` - Wall-clock time
//! - `EventBroadcaster` - Fan-out of projected events to live clients

mod clock;
mod contact_manager;
mod conversation_manager;
mod event_broadcaster;
mod messaging_manager;

pub use clock::Clock;
pub use contact_manager::{ContactListener, ContactManager};
pub use conversation_manager::ConversationManager;
pub use event_broadcaster::EventBroadcaster;
pub use messaging_manager::MessagingManager;

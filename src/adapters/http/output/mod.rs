//! View projections: domain snapshots to ordered wire records.
//!
//! Every function here is pure. Each call allocates a fresh `JsonDict`;
//! nothing is cached or shared, so projections are safe to call from any
//! number of request tasks at once.

mod author;
mod contact;
mod event;
mod message;

pub use author::project_author;
pub use contact::{project_contact, project_contact_added_event};
pub use event::project_event;
pub use message::project_private_message;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Binary-to-text encoding for byte fields.
pub(crate) fn encode_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

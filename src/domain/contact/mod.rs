//! Contact module - peers the local identity has added.
//!
//! Contacts are owned by the contact-management collaborator. The types here
//! are read-only snapshots handed to the HTTP layer for projection.

mod contact;
mod events;

pub use contact::Contact;
pub use events::ContactAddedEvent;

//! Contact query handlers.

mod list_contacts;

pub use list_contacts::{ContactActivity, ListContactsError, ListContactsHandler};

//! ContactManager port - read access to the contact list.

use async_trait::async_trait;

use crate::domain::contact::{Contact, ContactAddedEvent};
use crate::domain::foundation::{ContactId, DomainError};

/// Port for looking up contacts.
///
/// Implementations return snapshots; callers never mutate contacts through
/// this port.
#[async_trait]
pub trait ContactManager: Send + Sync {
    /// Get a contact by id.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if no contact has this id
    async fn get_contact(&self, id: ContactId) -> Result<Contact, DomainError>;

    /// All contacts, ordered by id.
    async fn get_contacts(&self) -> Result<Vec<Contact>, DomainError>;
}

/// Listener notified by the contact-management collaborator.
///
/// Called synchronously after the contact is stored; implementations must
/// not block.
pub trait ContactListener: Send + Sync {
    fn contact_added(&self, event: &ContactAddedEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ContactManager) {}
}

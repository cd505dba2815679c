//! Events raised by the contact-management collaborator.

use crate::domain::foundation::ContactId;

/// A contact was admitted.
///
/// Carries the verification state at the moment of addition; later changes
/// to the contact are not reflected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactAddedEvent {
    contact_id: ContactId,
    verified: bool,
}

impl ContactAddedEvent {
    /// Event name used on the event stream.
    pub const NAME: &'static str = "ContactAddedEvent";

    pub fn new(contact_id: ContactId, verified: bool) -> Self {
        Self {
            contact_id,
            verified,
        }
    }

    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

use crate::adapters::http::json::JsonDict;
use crate::domain::contact::{Contact, ContactAddedEvent};
use crate::domain::foundation::Timestamp;

use super::{encode_bytes, project_author};

/// Projects a contact together with its latest conversation activity.
///
/// Required keys come first, in order: `contactId`, `author`, `verified`,
/// `lastChatActivity`. `alias` and `handshakePublicKey` follow only when the
/// contact has them; an empty alias is still emitted.
pub fn project_contact(contact: &Contact, latest_msg_time: Timestamp) -> JsonDict {
    let mut dict = JsonDict::new()
        .with("contactId", contact.id().as_i32())
        .with("author", project_author(contact.author()))
        .with("verified", contact.is_verified())
        .with("lastChatActivity", latest_msg_time.as_millis());
    dict.put_if_present("alias", contact.alias());
    dict.put_if_present("handshakePublicKey", contact.handshake_public_key().map(encode_bytes));
    dict
}

/// Projects a contact-added notification: `contactId`, `verified`.
pub fn project_contact_added_event(event: &ContactAddedEvent) -> JsonDict {
    JsonDict::new()
        .with("contactId", event.contact_id().as_i32())
        .with("verified", event.is_verified())
}

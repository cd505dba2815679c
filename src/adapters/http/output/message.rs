use crate::adapters::http::json::JsonDict;
use crate::domain::foundation::ContactId;
use crate::domain::messaging::PrivateMessageHeader;

/// Projects a private message header.
///
/// Keys: `type`, `contactId`, `timestamp`, `read`, `seen`, `sent`, `local`,
/// `id`, `groupId`, then `text` when the text is loaded.
pub fn project_private_message(
    header: &PrivateMessageHeader,
    contact_id: ContactId,
    text: Option<&str>,
) -> JsonDict {
    let mut dict = JsonDict::new()
        .with("type", "PrivateMessage")
        .with("contactId", contact_id.as_i32())
        .with("timestamp", header.timestamp.as_millis())
        .with("read", header.read)
        .with("seen", header.seen)
        .with("sent", header.sent)
        .with("local", header.local)
        .with("id", header.id.unique_id().to_base64())
        .with("groupId", header.group_id.unique_id().to_base64());
    dict.put_if_present("text", text);
    dict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GroupId, MessageId, Timestamp, UniqueId};
    use serde_json::json;

    fn header() -> PrivateMessageHeader {
        PrivateMessageHeader {
            id: MessageId::new(UniqueId::from_bytes([1; 32])),
            group_id: GroupId::new(UniqueId::from_bytes([2; 32])),
            timestamp: Timestamp::from_millis(1_000),
            local: true,
            read: true,
            sent: false,
            seen: false,
        }
    }

    #[test]
    fn message_keys_in_order() {
        let dict = project_private_message(&header(), ContactId::new(3).unwrap(), Some("hi"));
        assert_eq!(
            dict.keys(),
            vec![
                "type", "contactId", "timestamp", "read", "seen", "sent", "local", "id",
                "groupId", "text"
            ]
        );
        assert_eq!(dict.get("type"), Some(&json!("PrivateMessage")));
        assert_eq!(dict.get("text"), Some(&json!("hi")));
        assert_eq!(dict.get("timestamp"), Some(&json!(1_000)));
    }

    #[test]
    fn text_omitted_when_not_loaded() {
        let dict = project_private_message(&header(), ContactId::new(3).unwrap(), None);
        assert!(!dict.contains_key("text"));
        assert_eq!(dict.len(), 9);
    }
}

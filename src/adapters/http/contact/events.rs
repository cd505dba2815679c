//! Forwarding of contact events to live clients.

use std::sync::Arc;

use crate::adapters::http::output::{project_contact_added_event, project_event};
use crate::domain::contact::ContactAddedEvent;
use crate::ports::{ContactListener, EventBroadcaster};

/// Projects contact events and pushes them through the broadcaster.
pub struct ContactEventForwarder {
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl ContactEventForwarder {
    pub fn new(broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { broadcaster }
    }
}

impl ContactListener for ContactEventForwarder {
    fn contact_added(&self, event: &ContactAddedEvent) {
        let frame = project_event(ContactAddedEvent::NAME, project_contact_added_event(event));
        let receivers = self.broadcaster.broadcast(frame.into());
        tracing::debug!(contact_id = %event.contact_id(), receivers, "Forwarded ContactAddedEvent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ContactId;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingBroadcaster {
        frames: Mutex<Vec<Value>>,
    }

    impl EventBroadcaster for CapturingBroadcaster {
        fn broadcast(&self, frame: Value) -> usize {
            self.frames.lock().unwrap().push(frame);
            1
        }
    }

    #[test]
    fn forwards_projected_event_frame() {
        let broadcaster = Arc::new(CapturingBroadcaster::default());
        let forwarder = ContactEventForwarder::new(broadcaster.clone());

        forwarder.contact_added(&ContactAddedEvent::new(ContactId::new(7).unwrap(), false));

        let frames = broadcaster.frames.lock().unwrap();
        assert_eq!(
            frames.as_slice(),
            &[json!({
                "type": "event",
                "name": "ContactAddedEvent",
                "data": { "contactId": 7, "verified": false }
            })]
        );
    }
}

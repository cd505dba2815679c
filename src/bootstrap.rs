//! Wiring of stores, handlers, controllers and routes into a running node.

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use crate::adapters::http::contact::{ContactAppState, ContactControllerImpl, ContactEventForwarder};
use crate::adapters::http::messaging::{MessagingAppState, MessagingControllerImpl};
use crate::adapters::http::build_router;
use crate::adapters::memory::{InMemoryContactStore, InMemoryMessageStore, SystemClock};
use crate::adapters::websocket::{BroadcastChannel, WebSocketState};
use crate::application::{ListContactsHandler, ListMessagesHandler, WriteMessageHandler};
use crate::config::AppConfig;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::identity::{Author, MAX_PUBLIC_KEY_LENGTH};
use crate::domain::messaging::MessageText;
use crate::ports::Clock;

/// Handles to the in-memory node behind the HTTP surface.
#[derive(Clone)]
pub struct Node {
    pub local_author: Author,
    pub contacts: Arc<InMemoryContactStore>,
    pub messages: Arc<InMemoryMessageStore>,
    pub events: BroadcastChannel,
}

impl Node {
    /// Creates empty stores for a freshly generated local identity.
    pub fn new(local_author_name: &str, channel_capacity: usize) -> Result<Self, DomainError> {
        let local_author = Author::new(local_author_name, random_key())?;
        let contacts = Arc::new(InMemoryContactStore::new(*local_author.id()));
        let messages = Arc::new(InMemoryMessageStore::new(contacts.clone()));
        let events = BroadcastChannel::new(channel_capacity);

        contacts.add_listener(Arc::new(ContactEventForwarder::new(Arc::new(events.clone()))))?;

        Ok(Self {
            local_author,
            contacts,
            messages,
            events,
        })
    }

    /// Builds the `/v1` router over this node's stores.
    pub fn router(&self, config: &AppConfig, clock: Arc<dyn Clock>) -> Router {
        let list_contacts = Arc::new(ListContactsHandler::new(
            self.contacts.clone(),
            self.messages.clone(),
        ));
        let list_messages = Arc::new(ListMessagesHandler::new(
            self.contacts.clone(),
            self.messages.clone(),
            self.messages.clone(),
        ));
        let write_message = Arc::new(WriteMessageHandler::new(
            self.contacts.clone(),
            self.messages.clone(),
            self.messages.clone(),
            clock,
        ));

        build_router(
            ContactAppState::new(Arc::new(ContactControllerImpl::new(list_contacts))),
            MessagingAppState::new(Arc::new(MessagingControllerImpl::new(
                list_messages,
                write_message,
            ))),
            WebSocketState::new(self.events.clone()),
            &config.server,
        )
    }

    /// Adds two contacts and a short conversation with the first.
    pub async fn seed_demo_contacts(&self, clock: &dyn Clock) -> Result<(), DomainError> {
        let alice = self.contacts.add_contact_with(
            Author::new("Alice", random_key())?,
            true,
            |c| c.with_handshake_public_key(random_key()),
        )?;
        self.contacts.add_contact_with(Author::new("Bob", random_key())?, false, |c| {
            c.with_alias("Bobby")
        })?;

        let now = clock.now().as_millis();
        for (offset, text) in [(60_000, "Hi there!"), (30_000, "Are you online?")] {
            self.messages
                .receive_private_message(
                    alice.contact_id(),
                    Timestamp::from_millis(now - offset),
                    MessageText::new(text)?,
                )
                .await?;
        }

        tracing::info!("Seeded demo contacts");
        Ok(())
    }
}

/// Wires a node and its router from `config`, seeding demo data when enabled.
pub async fn build_app(config: &AppConfig) -> Result<(Node, Router), DomainError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let node = Node::new(&config.node.local_author_name, config.events.channel_capacity)?;
    if config.node.seed_demo_contacts {
        node.seed_demo_contacts(clock.as_ref()).await?;
    }
    let router = node.router(config, clock);
    Ok((node, router))
}

fn random_key() -> Vec<u8> {
    let mut key = Vec::with_capacity(MAX_PUBLIC_KEY_LENGTH);
    while key.len() < MAX_PUBLIC_KEY_LENGTH {
        key.extend_from_slice(Uuid::new_v4().as_bytes());
    }
    key.truncate(MAX_PUBLIC_KEY_LENGTH);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ContactManager, ConversationManager};

    #[tokio::test]
    async fn seeding_adds_contacts_and_messages() {
        let node = Node::new("Me", 8).unwrap();
        node.seed_demo_contacts(&SystemClock).await.unwrap();

        let contacts = node.contacts.get_contacts().await.unwrap();
        assert_eq!(contacts.len(), 2);
        let count = node.messages.get_group_count(contacts[0].id()).await.unwrap();
        assert_eq!(count.msg_count, 2);
        assert_eq!(count.unread_count, 2);
    }

    #[tokio::test]
    async fn added_contacts_reach_event_subscribers() {
        let node = Node::new("Me", 8).unwrap();
        let mut rx = node.events.subscribe();

        node.contacts
            .add_contact(Author::new("Zed", vec![7; 32]).unwrap(), true)
            .unwrap();

        let frame: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(frame["name"], "ContactAddedEvent");
        assert_eq!(frame["data"]["contactId"], 1);
    }

    #[test]
    fn random_keys_have_full_length() {
        assert_eq!(random_key().len(), MAX_PUBLIC_KEY_LENGTH);
    }
}

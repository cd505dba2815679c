//! Broadcast channel implementing the `EventBroadcaster` port.

use serde_json::Value;
use tokio::sync::broadcast;

use crate::ports::EventBroadcaster;

/// Bounded fan-out channel of serialized event frames.
#[derive(Debug, Clone)]
pub struct BroadcastChannel {
    sender: broadcast::Sender<String>,
}

impl BroadcastChannel {
    /// Creates a channel buffering at most `capacity` frames per receiver.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration validation rejects that.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to frames broadcast from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventBroadcaster for BroadcastChannel {
    fn broadcast(&self, frame: Value) -> usize {
        // Err only means there are no receivers right now.
        self.sender.send(frame.to_string()).unwrap_or(0)
    }
}

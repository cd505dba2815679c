//! EventBroadcaster port - fan-out of projected events.

use serde_json::Value;

/// Port for pushing already-projected events to connected clients.
///
/// Broadcasting never fails from the caller's point of view: having no
/// listeners is normal, and slow listeners are the adapter's problem.
pub trait EventBroadcaster: Send + Sync {
    /// Sends one JSON event frame to every current listener.
    ///
    /// Returns the number of listeners that received it.
    fn broadcast(&self, frame: Value) -> usize;
}

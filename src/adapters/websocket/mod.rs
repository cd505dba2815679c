//! WebSocket adapter for pushing node events to connected clients.
//!
//! ```text
//! ContactManager ──contact_added──▶ ContactEventForwarder
//!                                         │ project_event(...)
//!                                         ▼
//!                                  BroadcastChannel ──▶ client A
//!                                                   ├──▶ client B
//!                                                   └──▶ client C
//! ```
//!
//! Every client receives every event as one JSON text frame. The channel
//! is bounded; a client that falls behind skips the frames it missed.

mod broadcaster;
mod handler;

pub use broadcaster::BroadcastChannel;
pub use handler::{websocket_routes, ws_handler, WebSocketState};

//! Adapters - implementations of ports and the HTTP/WebSocket surface.

pub mod http;
pub mod memory;
pub mod websocket;

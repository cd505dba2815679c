//! WebSocket upgrade handler for the event stream.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Subscribe to the broadcast channel
//! 3. Forward event frames until either side closes
//! 4. Drop the subscription

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use super::BroadcastChannel;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub channel: BroadcastChannel,
}

impl WebSocketState {
    pub fn new(channel: BroadcastChannel) -> Self {
        Self { channel }
    }
}

/// Handle WebSocket upgrade requests for the event stream.
///
/// Route: `GET /v1/ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs for the lifetime of one connection.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = Uuid::new_v4();
    let mut events = state.channel.subscribe();

    tracing::debug!(client_id = %client_id, "Event stream client connected");

    let mut send_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(frame) => {
                    if let Err(e) = sender.send(Message::Text(frame)).await {
                        tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(client_id = %client_id, skipped, "Event stream client lagging");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    tracing::debug!(client_id = %client_id, "Client sent close frame");
                    break;
                }
                Ok(_) => {
                    // Clients only listen; anything they send is ignored.
                }
                Err(e) => {
                    tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::debug!(client_id = %client_id, "Event stream client disconnected");
}

/// - GET /ws - Event stream
pub fn websocket_routes() -> Router<WebSocketState> {
    Router::new().route("/ws", get(ws_handler))
}

//! Axum handlers that adapt HTTP requests to the messaging controller.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::adapters::http::context::HttpContext;

use super::controller::{MessagingController, CONTACT_ID_PARAM};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MessagingAppState {
    controller: Arc<dyn MessagingController<Context = HttpContext>>,
}

impl MessagingAppState {
    pub fn new(controller: Arc<dyn MessagingController<Context = HttpContext>>) -> Self {
        Self { controller }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /v1/messages/:contact_id - List the conversation with a contact
pub async fn list_messages(
    State(state): State<MessagingAppState>,
    Path(contact_id): Path<String>,
) -> Response {
    let ctx = HttpContext::new().with_path_param(CONTACT_ID_PARAM, contact_id);
    state.controller.list(ctx).await.into_response()
}

/// POST /v1/messages/:contact_id - Send a private message
pub async fn write_message(
    State(state): State<MessagingAppState>,
    Path(contact_id): Path<String>,
    body: Bytes,
) -> Response {
    let ctx = HttpContext::new()
        .with_path_param(CONTACT_ID_PARAM, contact_id)
        .with_body(body);
    state.controller.write(ctx).await.into_response()
}

//! Contact controller.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

use crate::adapters::http::context::HttpContext;
use crate::adapters::http::dto::ErrorResponse;
use crate::adapters::http::output::project_contact;
use crate::application::{ListContactsError, ListContactsHandler};

/// Contact-list operations, same context-in/context-out shape as
/// [`MessagingController`](crate::adapters::http::messaging::MessagingController).
#[async_trait]
pub trait ContactController: Send + Sync {
    type Context: Send;

    /// Writes every contact with its latest chat activity.
    async fn list(&self, ctx: Self::Context) -> Self::Context;
}

pub struct ContactControllerImpl {
    list_handler: Arc<ListContactsHandler>,
}

impl ContactControllerImpl {
    pub fn new(list_handler: Arc<ListContactsHandler>) -> Self {
        Self { list_handler }
    }
}

#[async_trait]
impl ContactController for ContactControllerImpl {
    type Context = HttpContext;

    async fn list(&self, mut ctx: HttpContext) -> HttpContext {
        match self.list_handler.handle().await {
            Ok(items) => {
                let contacts: Vec<Value> = items
                    .iter()
                    .map(|item| project_contact(&item.contact, item.latest_msg_time).into())
                    .collect();
                ctx.json(contacts);
            }
            Err(ListContactsError::Collaborator(e)) => {
                tracing::error!(request_id = %ctx.request_id(), "Listing contacts failed: {}", e);
                ctx.error(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(e.message));
            }
        }
        ctx
    }
}

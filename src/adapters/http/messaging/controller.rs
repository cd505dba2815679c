//! Messaging controller contract and its implementation.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

use crate::adapters::http::context::HttpContext;
use crate::adapters::http::dto::{ErrorResponse, WriteMessageRequest};
use crate::adapters::http::output::project_private_message;
use crate::application::{
    ListMessagesError, ListMessagesHandler, ListMessagesQuery, WriteMessageCommand,
    WriteMessageError, WriteMessageHandler,
};
use crate::domain::foundation::ContactId;

/// Path parameter naming the contact.
pub const CONTACT_ID_PARAM: &str = "contactId";

/// Operations a conversation-serving handler must provide.
///
/// Both take the request/response context and return that same context with
/// the response written into it, so controllers compose like middleware.
/// Failures are never returned; they are written into the context as error
/// responses.
#[async_trait]
pub trait MessagingController: Send + Sync {
    type Context: Send;

    /// Writes the conversation with the contact named by the context.
    /// Never changes node state.
    async fn list(&self, ctx: Self::Context) -> Self::Context;

    /// Parses an outgoing message from the request body and submits it.
    async fn write(&self, ctx: Self::Context) -> Self::Context;
}

/// Messaging controller backed by the application handlers.
pub struct MessagingControllerImpl {
    list_handler: Arc<ListMessagesHandler>,
    write_handler: Arc<WriteMessageHandler>,
}

impl MessagingControllerImpl {
    pub fn new(list_handler: Arc<ListMessagesHandler>, write_handler: Arc<WriteMessageHandler>) -> Self {
        Self {
            list_handler,
            write_handler,
        }
    }
}

#[async_trait]
impl MessagingController for MessagingControllerImpl {
    type Context = HttpContext;

    async fn list(&self, mut ctx: HttpContext) -> HttpContext {
        let contact_id = match contact_id_from(&ctx) {
            Ok(id) => id,
            Err(error) => {
                ctx.error(StatusCode::BAD_REQUEST, error);
                return ctx;
            }
        };

        match self.list_handler.handle(ListMessagesQuery { contact_id }).await {
            Ok(list) => {
                let items: Vec<Value> = list
                    .items
                    .iter()
                    .map(|m| project_private_message(&m.header, list.contact_id, m.text.as_deref()).into())
                    .collect();
                ctx.json(items);
            }
            Err(e) => {
                let (status, error) = list_error_response(e);
                ctx.error(status, error);
            }
        }
        ctx
    }

    async fn write(&self, mut ctx: HttpContext) -> HttpContext {
        let contact_id = match contact_id_from(&ctx) {
            Ok(id) => id,
            Err(error) => {
                ctx.error(StatusCode::BAD_REQUEST, error);
                return ctx;
            }
        };

        let text = match ctx.body_as::<WriteMessageRequest>() {
            Ok(WriteMessageRequest { text: Some(text) }) => text,
            Ok(WriteMessageRequest { text: None }) => {
                ctx.error(StatusCode::BAD_REQUEST, ErrorResponse::bad_request("Expected text"));
                return ctx;
            }
            Err(e) => {
                tracing::debug!(request_id = %ctx.request_id(), "Malformed message body: {}", e);
                ctx.error(StatusCode::BAD_REQUEST, ErrorResponse::bad_request("Malformed JSON body"));
                return ctx;
            }
        };

        match self.write_handler.handle(WriteMessageCommand::new(contact_id, text)).await {
            Ok(result) => {
                ctx.json(project_private_message(
                    &result.header,
                    result.contact_id,
                    Some(result.text.as_str()),
                ));
            }
            Err(e) => {
                let (status, error) = write_error_response(e);
                ctx.error(status, error);
            }
        }
        ctx
    }
}

fn contact_id_from(ctx: &HttpContext) -> Result<ContactId, ErrorResponse> {
    let raw = ctx
        .path_param(CONTACT_ID_PARAM)
        .ok_or_else(|| ErrorResponse::bad_request("Missing contactId"))?;
    raw.parse::<ContactId>()
        .map_err(|e| ErrorResponse::bad_request(format!("Invalid contactId: {}", e)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn list_error_response(error: ListMessagesError) -> (StatusCode, ErrorResponse) {
    match error {
        ListMessagesError::ContactNotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Contact", &id.to_string()),
        ),
        ListMessagesError::Collaborator(e) => {
            tracing::error!("Listing messages failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(e.message))
        }
    }
}

fn write_error_response(error: WriteMessageError) -> (StatusCode, ErrorResponse) {
    match error {
        WriteMessageError::ContactNotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Contact", &id.to_string()),
        ),
        WriteMessageError::InvalidText(e) => {
            (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(e.to_string()))
        }
        WriteMessageError::Collaborator(e) => {
            tracing::error!("Sending message failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(e.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryContactStore, InMemoryMessageStore, ManualClock};
    use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
    use crate::domain::identity::Author;
    use crate::domain::messaging::{MessageText, MAX_PRIVATE_MESSAGE_TEXT_LENGTH};
    use crate::ports::ConversationManager;
    use serde_json::json;

    struct Fixture {
        controller: MessagingControllerImpl,
        messages: Arc<InMemoryMessageStore>,
        contact_id: ContactId,
    }

    fn fixture() -> Fixture {
        let me = Author::new("Me", vec![1; 32]).unwrap();
        let contacts = Arc::new(InMemoryContactStore::new(*me.id()));
        let bob = contacts
            .add_contact(Author::new("Bob", vec![2; 32]).unwrap(), true)
            .unwrap();
        let messages = Arc::new(InMemoryMessageStore::new(contacts.clone()));
        let clock = Arc::new(ManualClock::new(Timestamp::from_millis(5_000)));

        let list = Arc::new(ListMessagesHandler::new(
            contacts.clone(),
            messages.clone(),
            messages.clone(),
        ));
        let write = Arc::new(WriteMessageHandler::new(
            contacts,
            messages.clone(),
            messages.clone(),
            clock,
        ));
        Fixture {
            controller: MessagingControllerImpl::new(list, write),
            messages,
            contact_id: bob.contact_id(),
        }
    }

    fn ctx_for(id: impl ToString) -> HttpContext {
        HttpContext::new().with_path_param(CONTACT_ID_PARAM, id.to_string())
    }

    #[tokio::test]
    async fn list_returns_the_same_context() {
        let f = fixture();
        let ctx = ctx_for(f.contact_id);
        let request_id = ctx.request_id();

        let ctx = f.controller.list(ctx).await;
        assert_eq!(ctx.request_id(), request_id);
        assert_eq!(ctx.status(), StatusCode::OK);
        assert_eq!(ctx.response_body(), Some(&json!([])));
    }

    #[tokio::test]
    async fn list_projects_messages() {
        let f = fixture();
        f.messages
            .receive_private_message(f.contact_id, Timestamp::from_millis(10), MessageText::new("yo").unwrap())
            .await
            .unwrap();

        let ctx = f.controller.list(ctx_for(f.contact_id)).await;
        let body = ctx.response_body().unwrap();
        assert_eq!(body[0]["type"], json!("PrivateMessage"));
        assert_eq!(body[0]["contactId"], json!(f.contact_id.as_i32()));
        assert_eq!(body[0]["text"], json!("yo"));
        assert_eq!(body[0]["local"], json!(false));
    }

    #[tokio::test]
    async fn list_rejects_bad_contact_id() {
        let f = fixture();
        let ctx = f.controller.list(ctx_for("abc")).await;
        assert_eq!(ctx.status(), StatusCode::BAD_REQUEST);

        let ctx = f.controller.list(HttpContext::new()).await;
        assert_eq!(ctx.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_unknown_contact_is_404() {
        let f = fixture();
        let ctx = f.controller.list(ctx_for(77)).await;
        assert_eq!(ctx.status(), StatusCode::NOT_FOUND);
        assert_eq!(ctx.response_body().unwrap()["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn write_submits_and_echoes_message() {
        let f = fixture();
        let ctx = ctx_for(f.contact_id).with_body(r#"{"text":"hello"}"#);
        let request_id = ctx.request_id();

        let ctx = f.controller.write(ctx).await;
        assert_eq!(ctx.request_id(), request_id);
        assert_eq!(ctx.status(), StatusCode::OK);

        let body = ctx.response_body().unwrap();
        assert_eq!(body["text"], json!("hello"));
        assert_eq!(body["local"], json!(true));
        assert_eq!(body["timestamp"], json!(5_000));

        let listed = f.controller.list(ctx_for(f.contact_id)).await;
        assert_eq!(listed.response_body().unwrap().as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn write_rejects_missing_empty_and_oversized_text() {
        let f = fixture();
        let too_long = "x".repeat(MAX_PRIVATE_MESSAGE_TEXT_LENGTH + 1);
        let oversized = serde_json::to_string(&json!({ "text": too_long })).unwrap();

        for body in ["{}".to_string(), r#"{"text":""}"#.to_string(), "not json".to_string(), oversized] {
            let ctx = f.controller.write(ctx_for(f.contact_id).with_body(body)).await;
            assert_eq!(ctx.status(), StatusCode::BAD_REQUEST);
        }
        let count = f.messages.get_group_count(f.contact_id).await.unwrap();
        assert_eq!(count.msg_count, 0);
    }

    #[tokio::test]
    async fn write_unknown_contact_is_404() {
        let f = fixture();
        let ctx = f.controller.write(ctx_for(3).with_body(r#"{"text":"hi"}"#)).await;
        assert_eq!(ctx.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn collaborator_failures_map_to_500() {
        let (status, error) = write_error_response(WriteMessageError::Collaborator(
            DomainError::new(ErrorCode::StorageError, "disk full"),
        ));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "disk full");
    }
}

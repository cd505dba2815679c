//! Axum routes for messaging endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_messages, write_message, MessagingAppState};

/// Creates routes for messaging endpoints.
///
/// - GET /messages/{contact_id} - List the conversation with a contact
/// - POST /messages/{contact_id} - Send a private message to a contact
pub fn messaging_routes() -> Router<MessagingAppState> {
    Router::new().route("/messages/:contact_id", get(list_messages).post(write_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::http::context::HttpContext;
    use crate::adapters::http::messaging::{MessagingController, CONTACT_ID_PARAM};

    /// Echoes which operation ran and the contact id it saw.
    struct EchoController;

    #[async_trait]
    impl MessagingController for EchoController {
        type Context = HttpContext;

        async fn list(&self, mut ctx: HttpContext) -> HttpContext {
            let id = ctx.path_param(CONTACT_ID_PARAM).unwrap_or_default().to_string();
            ctx.json(serde_json::json!({ "op": "list", "id": id }));
            ctx
        }

        async fn write(&self, mut ctx: HttpContext) -> HttpContext {
            let body = String::from_utf8_lossy(ctx.body()).to_string();
            ctx.respond(StatusCode::ACCEPTED, serde_json::json!({ "op": "write", "body": body }));
            ctx
        }
    }

    fn app() -> Router {
        messaging_routes().with_state(MessagingAppState::new(Arc::new(EchoController)))
    }

    #[tokio::test]
    async fn get_dispatches_to_list() {
        let response = app()
            .oneshot(Request::builder().uri("/messages/12").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "op": "list", "id": "12" }));
    }

    #[tokio::test]
    async fn post_dispatches_to_write_with_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/messages/12")
                    .body(Body::from(r#"{"text":"hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["body"], serde_json::json!(r#"{"text":"hi"}"#));
    }
}

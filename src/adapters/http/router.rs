//! Assembles the versioned API router.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_routes, WebSocketState};
use crate::config::ServerConfig;

use super::contact::{contact_routes, ContactAppState};
use super::messaging::{messaging_routes, MessagingAppState};

/// Prefix every route is mounted under.
pub const API_PREFIX: &str = "/v1";

/// Builds the full HTTP surface:
///
/// - GET  /v1/contacts
/// - GET  /v1/messages/:contact_id
/// - POST /v1/messages/:contact_id
/// - GET  /v1/ws
pub fn build_router(
    contacts: ContactAppState,
    messaging: MessagingAppState,
    events: WebSocketState,
    server: &ServerConfig,
) -> Router {
    let api = Router::new()
        .merge(contact_routes().with_state(contacts))
        .merge(messaging_routes().with_state(messaging))
        .merge(websocket_routes().with_state(events));

    Router::new().nest(API_PREFIX, api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
            .layer(cors_layer(&server.cors_origins_list())),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::adapters::http::context::HttpContext;
    use crate::adapters::http::contact::ContactController;
    use crate::adapters::http::messaging::MessagingController;
    use crate::adapters::websocket::BroadcastChannel;

    struct Fixed;

    #[async_trait]
    impl ContactController for Fixed {
        type Context = HttpContext;

        async fn list(&self, mut ctx: HttpContext) -> HttpContext {
            ctx.json(json!([]));
            ctx
        }
    }

    #[async_trait]
    impl MessagingController for Fixed {
        type Context = HttpContext;

        async fn list(&self, mut ctx: HttpContext) -> HttpContext {
            ctx.json(json!([]));
            ctx
        }

        async fn write(&self, mut ctx: HttpContext) -> HttpContext {
            ctx.json(json!({}));
            ctx
        }
    }

    fn app(cors: Option<&str>) -> Router {
        let server = ServerConfig {
            cors_origins: cors.map(str::to_string),
            ..Default::default()
        };
        build_router(
            ContactAppState::new(Arc::new(Fixed)),
            MessagingAppState::new(Arc::new(Fixed)),
            WebSocketState::new(BroadcastChannel::new(4)),
            &server,
        )
    }

    async fn status_of(app: Router, request: Request<Body>) -> StatusCode {
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn routes_are_versioned() {
        let get = |uri: &str| Request::builder().uri(uri).body(Body::empty()).unwrap();

        assert_eq!(status_of(app(None), get("/v1/contacts")).await, StatusCode::OK);
        assert_eq!(status_of(app(None), get("/v1/messages/1")).await, StatusCode::OK);
        assert_eq!(status_of(app(None), get("/contacts")).await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let request = Request::builder()
            .uri("/v1/contacts")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app(Some("http://localhost:5173"))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }
}

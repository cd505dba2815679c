//! Request/response context handed to controllers.
//!
//! A context carries one inbound request (path parameters and raw body) and
//! the response the controller writes into it. Controllers take the context
//! by value and hand the same value back, so calls chain like middleware.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::dto::ErrorResponse;

#[derive(Debug, Clone)]
pub struct HttpContext {
    request_id: Uuid,
    path_params: HashMap<String, String>,
    body: Bytes,
    status: StatusCode,
    response: Option<Value>,
}

impl HttpContext {
    /// Creates an empty context with a fresh request id.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            path_params: HashMap::new(),
            body: Bytes::new(),
            status: StatusCode::OK,
            response: None,
        }
    }

    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Identifies this request in logs; survives every controller call.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parses the request body as JSON.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Writes a JSON response body with status 200.
    pub fn json(&mut self, body: impl Serialize) -> &mut Self {
        self.respond(StatusCode::OK, body)
    }

    /// Writes a JSON response body with the given status.
    ///
    /// A body that fails to serialize becomes a 500 error response.
    pub fn respond(&mut self, status: StatusCode, body: impl Serialize) -> &mut Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.status = status;
                self.response = Some(value);
            }
            Err(e) => {
                tracing::error!(request_id = %self.request_id, "Response serialization failed: {}", e);
                self.status = StatusCode::INTERNAL_SERVER_ERROR;
                self.response = serde_json::to_value(ErrorResponse::internal("Response serialization failed")).ok();
            }
        }
        self
    }

    /// Writes an error response.
    pub fn error(&mut self, status: StatusCode, error: ErrorResponse) -> &mut Self {
        self.respond(status, error)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response body written so far, if any.
    pub fn response_body(&self) -> Option<&Value> {
        self.response.as_ref()
    }
}

impl Default for HttpContext {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for HttpContext {
    fn into_response(self) -> Response {
        match self.response {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

//! Axum handlers for contact endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::adapters::http::context::HttpContext;

use super::controller::ContactController;

#[derive(Clone)]
pub struct ContactAppState {
    controller: Arc<dyn ContactController<Context = HttpContext>>,
}

impl ContactAppState {
    pub fn new(controller: Arc<dyn ContactController<Context = HttpContext>>) -> Self {
        Self { controller }
    }
}

/// GET /v1/contacts - List contacts
pub async fn list_contacts(State(state): State<ContactAppState>) -> Response {
    state.controller.list(HttpContext::new()).await.into_response()
}

//! Axum routes for contact endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_contacts, ContactAppState};

/// - GET /contacts - List contacts with their latest chat activity
pub fn contact_routes() -> Router<ContactAppState> {
    Router::new().route("/contacts", get(list_contacts))
}

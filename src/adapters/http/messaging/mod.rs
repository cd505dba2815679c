//! HTTP adapter for private messaging endpoints.

mod controller;
mod handlers;
mod routes;

pub use controller::{MessagingController, MessagingControllerImpl, CONTACT_ID_PARAM};
pub use handlers::MessagingAppState;
pub use routes::messaging_routes;

//! HTTP adapter for contact endpoints and contact events.

mod controller;
mod events;
mod handlers;
mod routes;

pub use controller::{ContactController, ContactControllerImpl};
pub use events::ContactEventForwarder;
pub use handlers::ContactAppState;
pub use routes::contact_routes;

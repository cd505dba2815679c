//! HTTP adapters - REST API implementations.
//!
//! Controllers take a request context and hand it back with the response
//! filled in; the axum handlers only build contexts and render them.

pub mod contact;
pub mod context;
pub mod dto;
pub mod json;
pub mod messaging;
pub mod output;
mod router;

pub use context::HttpContext;
pub use json::JsonDict;
pub use router::{build_router, API_PREFIX};

//! Domain layer containing the node's data model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `identity` - Authors (pseudonymous identities)
//! - `contact` - Contacts and contact lifecycle events
//! - `messaging` - Private message text, headers and conversation counts

pub mod contact;
pub mod foundation;
pub mod identity;
pub mod messaging;

//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that form the
//! vocabulary shared by contacts, identities and conversations.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AuthorId, ContactId, GroupId, MessageId, UniqueId, UNIQUE_ID_LENGTH};
pub use timestamp::Timestamp;

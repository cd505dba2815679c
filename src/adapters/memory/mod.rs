//! In-memory collaborator adapters.
//!
//! These stand in for the messaging node's contact and message stores so the
//! REST front-end can run and be tested without a peer-to-peer backend.
//! State lives behind `std::sync::RwLock`; critical sections never await.

mod clock;
mod contact_store;
mod message_store;

pub use clock::{ManualClock, SystemClock};
pub use contact_store::InMemoryContactStore;
pub use message_store::InMemoryMessageStore;

use crate::domain::foundation::{DomainError, ErrorCode};

fn poisoned<T>(_: T) -> DomainError {
    DomainError::new(ErrorCode::StorageError, "In-memory store lock poisoned")
}

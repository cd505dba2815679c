//! Clock port.

use crate::domain::foundation::Timestamp;

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    /// Current time in Unix milliseconds.
    fn now(&self) -> Timestamp;
}

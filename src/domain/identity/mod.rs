//! Identity module - authors as seen by the messaging node.

mod author;

pub use author::{Author, AUTHOR_FORMAT_VERSION, MAX_AUTHOR_NAME_LENGTH, MAX_PUBLIC_KEY_LENGTH};

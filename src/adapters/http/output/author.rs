use crate::adapters::http::json::JsonDict;
use crate::domain::identity::Author;

use super::encode_bytes;

/// Projects an author.
///
/// Keys: `formatVersion`, `id`, `name`, `publicKey`.
pub fn project_author(author: &Author) -> JsonDict {
    JsonDict::new()
        .with("formatVersion", author.format_version())
        .with("id", author.id().unique_id().to_base64())
        .with("name", author.name())
        .with("publicKey", encode_bytes(author.public_key()))
}

use serde_json::Value;

use crate::adapters::http::json::JsonDict;

/// Wraps a projected record as an event frame: `type`, `name`, `data`.
pub fn project_event(name: &str, data: impl Into<Value>) -> JsonDict {
    JsonDict::new()
        .with("type", "event")
        .with("name", name)
        .with("data", data)
}

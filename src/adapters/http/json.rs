//! Ordered JSON record used for every response body.
//!
//! Keys serialize in insertion order (`serde_json` is built with
//! `preserve_order`), which is part of the wire contract.

use serde::Serialize;
use serde_json::{Map, Value};

/// An ordered string-keyed JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonDict(Map<String, Value>);

impl JsonDict {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Appends a key, builder style.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.put(key, value);
        self
    }

    /// Appends a key. Re-inserting an existing key keeps its position.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Appends a key only when the value is present.
    pub fn put_if_present<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.put(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in wire order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<JsonDict> for Value {
    fn from(dict: JsonDict) -> Self {
        Value::Object(dict.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_keep_insertion_order() {
        let dict = JsonDict::new()
            .with("zeta", 1)
            .with("alpha", true)
            .with("mid", "x");
        assert_eq!(dict.keys(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&dict).unwrap(),
            r#"{"zeta":1,"alpha":true,"mid":"x"}"#
        );
    }

    #[test]
    fn put_if_present_skips_none() {
        let mut dict = JsonDict::new();
        dict.put_if_present::<String>("alias", None);
        dict.put_if_present("name", Some(""));
        assert!(!dict.contains_key("alias"));
        assert_eq!(dict.get("name"), Some(&Value::from("")));
    }

    #[test]
    fn nests_as_object_value() {
        let inner = JsonDict::new().with("a", 1);
        let outer = JsonDict::new().with("inner", inner);
        assert_eq!(serde_json::to_string(&outer).unwrap(), r#"{"inner":{"a":1}}"#);
    }
}

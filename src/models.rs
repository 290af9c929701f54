//! Frontend Models
//!
//! Data structures matching the generator backend payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields tried, in order, when picking a display heading for an item
const TITLE_FIELDS: &[&str] = &["name", "title"];

/// Identifier of a generator item.
///
/// The backend sends either a JSON integer or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

/// One generated result. Everything except `item_id` is opaque and kept
/// in the order the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorItem {
    pub item_id: ItemId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl GeneratorItem {
    /// Heading text: the first string-valued `name` or `title` field
    pub fn title(&self) -> Option<&str> {
        self.title_field().and_then(|key| self.fields.get(key)).and_then(Value::as_str)
    }

    /// Remaining fields as display pairs, excluding the one used as title
    pub fn details(&self) -> Vec<(String, String)> {
        let title_key = self.title_field();
        self.fields
            .iter()
            .filter(|(key, _)| Some(key.as_str()) != title_key)
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect()
    }

    fn title_field(&self) -> Option<&'static str> {
        TITLE_FIELDS
            .iter()
            .copied()
            .find(|key| matches!(self.fields.get(*key), Some(Value::String(_))))
    }
}

#[cfg(test)]
impl GeneratorItem {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Payload submitted by the creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGenerator {
    pub name: String,
}

impl NewGenerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into().trim().to_string() }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

//! Translation tables: nested JSON dictionaries addressed by dotted key paths.

use serde_json::{Map, Value};

/// Error returned when a JSON document cannot be used as a translation table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("table root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Translation dictionary for a single language.
///
/// Immutable once constructed. Leaves are expected to be strings; any other
/// leaf is treated as absent during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    root: Map<String, Value>,
}

impl TranslationTable {
    /// Parse a table from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a table from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, TableError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(TableError::NotAnObject(json_kind(&other))),
        }
    }

    /// Resolve a dotted key path such as `"greeting.hello"`.
    ///
    /// Returns `None` when a segment is absent, when an intermediate value is
    /// not an object, or when the leaf is not a non-empty string.
    pub fn resolve(&self, key_path: &str) -> Option<&str> {
        let mut segments = key_path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        current.as_str().filter(|value| !value.is_empty())
    }

    /// Every key path that resolves to a usable string, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, "", &mut keys);
        keys.sort();
        keys
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaf_keys(map: &Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(nested) => collect_leaf_keys(nested, &path, keys),
            Value::String(s) if !s.is_empty() => keys.push(path),
            _ => {}
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

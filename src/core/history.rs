// Recent searches, most recent first
//
// Holds at most MAX_HISTORY distinct, trimmed, non-empty queries.
// Persisted elsewhere as a plain JSON array of strings.

use serde_json::Value;
use tracing::warn;

pub const MAX_HISTORY: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryHistory {
    entries: Vec<String>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    // Rebuild from stored JSON. Anything unusable falls back to an empty
    // history instead of an error; stray items inside an array are skipped.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };

        let items = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                warn!(kind = json_kind(&other), "Stored search history is not an array, starting fresh");
                return Self::new();
            }
            Err(e) => {
                warn!(error = %e, "Stored search history is corrupt, starting fresh");
                return Self::new();
            }
        };

        let mut history = Self::new();
        for item in items {
            let Value::String(query) = item else {
                continue;
            };
            let query = query.trim();
            if query.is_empty() || history.contains(query) {
                continue;
            }
            if history.entries.len() == MAX_HISTORY {
                break;
            }
            history.entries.push(query.to_string());
        }

        history
    }

    pub fn to_json(&self) -> String {
        // Serializing a Vec<String> can't fail
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Move `query` to the front, dropping any older copy and anything past the limit.
    ///
    /// Returns false when the trimmed query is empty and nothing was recorded.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.entries.retain(|existing| existing != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_HISTORY);

        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|existing| existing == query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

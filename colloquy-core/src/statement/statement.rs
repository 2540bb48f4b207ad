use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single conversational turn.
///
/// Statements are immutable values identified by their text. Relationships
/// to earlier turns are expressed purely through `in_response_to` text keys
/// rather than live references, so the response structure stays acyclic at
/// the ownership level even though the underlying relation is graph-shaped
/// (a statement may have multiple parents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    /// The text of this statement. Serves as the identity key.
    pub text: String,
    /// Text keys of the statements this one has been observed responding to.
    #[serde(default)]
    pub in_response_to: BTreeSet<String>,
    /// Free-form metadata attached by the caller.
    #[serde(default)]
    pub extra_data: BTreeMap<String, serde_json::Value>,
    /// When this statement was first created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Statement {
    /// Create a new statement with no predecessors.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            in_response_to: BTreeSet::new(),
            extra_data: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Record that this statement has been observed in response to `text`.
    pub fn add_response(&mut self, text: impl Into<String>) {
        self.in_response_to.insert(text.into());
    }

    /// Whether this statement has been observed responding to `text`.
    pub fn responds_to(&self, text: &str) -> bool {
        self.in_response_to.contains(text)
    }

    /// Attach a metadata value under `key`.
    pub fn add_extra_data(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra_data.insert(key.into(), value);
    }
}

/// Identity comparison: two statements are the same statement iff their
/// text keys match. Predecessor links and metadata do not participate
/// (entity pattern — the text is the key the store indexes by).
impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Statement {}

impl Hash for Statement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_text_only() {
        let a = Statement::new("hello");
        let mut b = Statement::new("hello");
        b.add_response("earlier turn");
        assert_eq!(a, b);
    }

    #[test]
    fn responds_to_tracks_added_keys() {
        let mut s = Statement::new("I am good.");
        s.add_response("How are you?");
        assert!(s.responds_to("How are you?"));
        assert!(!s.responds_to("Goodbye"));
    }

    #[test]
    fn serde_defaults_fill_missing_fields() {
        let s: Statement = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(s.text, "hi");
        assert!(s.in_response_to.is_empty());
        assert!(s.extra_data.is_empty());
    }
}

//! Opaque FHIR `Extension` carried by coded values.
//!
//! Extensions are stored and forwarded verbatim. Only the `url` is ever
//! inspected, and only to recognise the data-absent-reason extension.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical URL of the core `data-absent-reason` extension.
pub const DATA_ABSENT_REASON_URL: &str =
    "http://hl7.org/fhir/StructureDefinition/data-absent-reason";

/// A FHIR extension: a `url` plus whatever `value[x]`, `id` or nested
/// `extension` members came with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: Map::new(),
        }
    }

    /// Adds a member such as `valueString` or `valueCode`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    /// `data-absent-reason` extension with the given `valueCode` (e.g. `"unknown"`).
    pub fn data_absent_reason(reason: &str) -> Self {
        Self::new(DATA_ABSENT_REASON_URL).with("valueCode", reason)
    }

    pub fn is_data_absent_reason(&self) -> bool {
        self.url == DATA_ABSENT_REASON_URL
    }
}

// serde_json::Map is ordered by key, so equal maps hash identically.
impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        for (key, value) in &self.content {
            key.hash(state);
            value.to_string().hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_arbitrary_members() {
        let raw = json!({
            "url": "http://example.org/fhir/StructureDefinition/note",
            "valueString": "checked by triage",
            "id": "n1"
        });
        let ext: Extension = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(ext.url, "http://example.org/fhir/StructureDefinition/note");
        assert_eq!(ext.content.get("valueString"), Some(&json!("checked by triage")));
        assert_eq!(serde_json::to_value(&ext).unwrap(), raw);
    }

    #[test]
    fn recognises_data_absent_reason() {
        let ext = Extension::data_absent_reason("unknown");
        assert!(ext.is_data_absent_reason());
        assert_eq!(ext.content.get("valueCode"), Some(&json!("unknown")));
        assert!(!Extension::new("http://example.org/other").is_data_absent_reason());
    }
}

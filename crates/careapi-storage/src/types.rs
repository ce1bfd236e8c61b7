//! Storage types for the document storage abstraction layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// The payload field that carries the document identifier.
pub const ID_FIELD: &str = "_id";

/// Extracts the document identifier from a payload, if present and non-empty.
#[must_use]
pub fn document_id(document: &Value) -> Option<&str> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// A document as stored in the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// The document ID.
    pub id: String,
    /// The version ID of this specific version.
    pub version_id: String,
    /// The full document payload as JSON, with the ID embedded under `_id`.
    pub document: Value,
    /// When this version was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    /// When the document was originally created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl StoredDocument {
    /// Creates a new `StoredDocument`.
    #[must_use]
    pub fn new(id: impl Into<String>, version_id: impl Into<String>, document: Value) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: id.into(),
            version_id: version_id.into(),
            document,
            last_updated: now,
            created_at: now,
        }
    }

    /// Creates a new version of this document with replaced content.
    #[must_use]
    pub fn new_version(&self, version_id: impl Into<String>, document: Value) -> Self {
        Self {
            id: self.id.clone(),
            version_id: version_id.into(),
            document,
            last_updated: OffsetDateTime::now_utc(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id_extraction() {
        assert_eq!(document_id(&json!({"_id": "mock_id"})), Some("mock_id"));
        assert_eq!(document_id(&json!({"_id": ""})), None);
        assert_eq!(document_id(&json!({"_id": 42})), None);
        assert_eq!(document_id(&json!({"title": "no id"})), None);
        assert_eq!(document_id(&json!("not an object")), None);
    }

    #[test]
    fn test_new_version_preserves_identity() {
        let doc = StoredDocument::new("doc-1", "1", json!({"_id": "doc-1", "n": 1}));
        let next = doc.new_version("2", json!({"_id": "doc-1", "n": 2}));

        assert_eq!(next.id, "doc-1");
        assert_eq!(next.version_id, "2");
        assert_eq!(next.created_at, doc.created_at);
        assert_eq!(next.document["n"], 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = StoredDocument::new("doc-1", "1", json!({"_id": "doc-1"}));
        let encoded = serde_json::to_string(&doc).unwrap();
        let decoded: StoredDocument = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.id, doc.id);
        assert_eq!(decoded.version_id, doc.version_id);
        assert_eq!(decoded.document, doc.document);
    }
}

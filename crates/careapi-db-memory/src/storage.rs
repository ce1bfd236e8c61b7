use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use uuid::Uuid;

use careapi_storage::{DocumentStorage, ID_FIELD, StorageError, StoredDocument, document_id};

/// In-memory document storage backend using a sharded concurrent HashMap.
///
/// This storage implementation provides:
/// - Concurrent access via dashmap
/// - Full CRUD operations with version tracking
/// - Per-document write serialization: every read-modify-write runs under the
///   map's entry lock for that key, so two mutations of the same ID cannot
///   interleave
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Main storage, keyed by document ID.
    data: DashMap<String, StoredDocument>,
    /// Atomic counter for generating version IDs.
    version_counter: AtomicU64,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            version_counter: AtomicU64::new(1),
        }
    }

    /// Generates the next version ID.
    fn next_version(&self) -> String {
        self.version_counter
            .fetch_add(1, Ordering::SeqCst)
            .to_string()
    }

    /// Returns the number of stored documents.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Validates the payload shape and returns a copy with `id` embedded under `_id`.
    fn normalize(document: &Value, id: &str) -> Result<Value, StorageError> {
        let Value::Object(fields) = document else {
            return Err(StorageError::invalid_document(
                "document payload must be a JSON object",
            ));
        };

        let mut fields = fields.clone();
        fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        Ok(Value::Object(fields))
    }

    /// Resolves the ID for a create: taken from the payload when present,
    /// generated otherwise.
    fn create_id(document: &Value) -> Result<String, StorageError> {
        match document.get(ID_FIELD) {
            None | Some(Value::Null) => Ok(Uuid::new_v4().to_string()),
            Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            Some(_) => Err(StorageError::invalid_document(
                "'_id' must be a non-empty string",
            )),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStorage for InMemoryStorage {
    async fn create(&self, document: &Value) -> Result<StoredDocument, StorageError> {
        let id = Self::create_id(document)?;
        let payload = Self::normalize(document, &id)?;

        // The entry guard holds the shard lock until the insert completes, so
        // two concurrent creates of the same ID cannot both succeed.
        match self.data.entry(id.clone()) {
            Entry::Occupied(_) => Err(StorageError::already_exists(id)),
            Entry::Vacant(slot) => {
                let stored = StoredDocument::new(id, self.next_version(), payload);
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StorageError> {
        Ok(self.data.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, document: &Value) -> Result<StoredDocument, StorageError> {
        let id = document_id(document)
            .ok_or_else(|| {
                StorageError::invalid_document("update payload must carry a non-empty '_id'")
            })?
            .to_string();
        let payload = Self::normalize(document, &id)?;

        // Read-modify-write under the entry lock: at most one concurrent
        // writer per document ID.
        match self.data.entry(id.clone()) {
            Entry::Occupied(mut slot) => {
                let next = slot.get().new_version(self.next_version(), payload);
                slot.insert(next.clone());
                Ok(next)
            }
            Entry::Vacant(_) => Err(StorageError::not_found(id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        match self.data.remove(id) {
            Some(_) => Ok(()),
            None => Err(StorageError::not_found(id)),
        }
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError> {
        let mut documents: Vec<StoredDocument> = self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(documents)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

//! Storage traits for the document storage abstraction layer.
//!
//! This module defines the core trait that all storage backends must implement.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageError;
use crate::types::StoredDocument;

/// The main storage trait that all document storage backends must implement.
///
/// This trait defines the contract for the CRUD operations exposed by the
/// GraphQL layer. Implementations must be thread-safe (`Send + Sync`), and
/// must serialize mutations targeting the same document ID so concurrent
/// writers cannot lose updates.
///
/// # Example
///
/// ```ignore
/// use careapi_storage::{DocumentStorage, StorageError, StoredDocument};
///
/// async fn fetch(storage: &dyn DocumentStorage, id: &str) -> Result<StoredDocument, StorageError> {
///     storage.get(id).await?.ok_or_else(|| StorageError::not_found(id))
/// }
/// ```
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Creates a new document in the storage.
    ///
    /// If the payload carries no `_id`, the backend assigns one. The returned
    /// `StoredDocument` always has the ID embedded in the payload.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if a document with the same ID exists.
    /// Returns `StorageError::InvalidDocument` if the payload is not a JSON object.
    async fn create(&self, document: &Value) -> Result<StoredDocument, StorageError>;

    /// Reads a document by ID.
    ///
    /// Returns `None` if the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing documents.
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StorageError>;

    /// Replaces an existing document's payload.
    ///
    /// The payload must carry the `_id` of the document to replace.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the document does not exist.
    /// Returns `StorageError::InvalidDocument` if the payload is not a JSON
    /// object or carries no `_id`.
    async fn update(&self, document: &Value) -> Result<StoredDocument, StorageError>;

    /// Deletes a document by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the document does not exist. A
    /// second delete of the same ID therefore fails rather than succeeding
    /// silently.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;

    /// Lists all documents, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues.
    async fn list(&self) -> Result<Vec<StoredDocument>, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

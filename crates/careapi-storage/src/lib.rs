//! # careapi-storage
//!
//! Storage abstraction layer for the CareApi microservice.
//!
//! This crate defines the trait and types that all storage backends must
//! implement. It does not contain any implementations - those are provided by
//! separate crates.
//!
//! ## Overview
//!
//! The main trait is [`DocumentStorage`], which defines the contract for:
//! - CRUD operations (create, get, update, delete)
//! - Listing all stored documents
//!
//! Backends are injected into the GraphQL layer as [`DynStorage`] trait
//! objects, so a real database can replace the in-memory backend without
//! touching resolver logic.
//!
//! ## Storage Backends
//!
//! To implement a storage backend, implement the [`DocumentStorage`] trait:
//!
//! ```ignore
//! use async_trait::async_trait;
//! use careapi_storage::{DocumentStorage, StorageError, StoredDocument};
//!
//! struct MyStorage {
//!     // ...
//! }
//!
//! #[async_trait]
//! impl DocumentStorage for MyStorage {
//!     async fn create(&self, document: &Value) -> Result<StoredDocument, StorageError> {
//!         // Implementation
//!     }
//!     // ... other methods
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::DocumentStorage;
pub use types::{ID_FIELD, StoredDocument, document_id};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared storage trait object.
pub type DynStorage = std::sync::Arc<dyn DocumentStorage>;

//! GraphQL execution context.
//!
//! The context holds the dependencies resolvers need to execute an operation.
//! It is constructed per request and passed through the async-graphql data
//! system.

use careapi_storage::DynStorage;

/// GraphQL execution context.
///
/// Cheap to clone: the storage handle is an `Arc` trait object.
#[derive(Clone)]
pub struct GraphQLContext {
    /// Document storage.
    pub storage: DynStorage,

    /// Request ID for tracing and correlation.
    pub request_id: String,
}

impl GraphQLContext {
    /// Creates a context with an unknown request ID.
    #[must_use]
    pub fn new(storage: DynStorage) -> Self {
        Self {
            storage,
            request_id: "unknown".to_string(),
        }
    }

    /// Sets the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}

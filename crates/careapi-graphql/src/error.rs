//! Error types for GraphQL operations.
//!
//! This module defines the error taxonomy surfaced in the response envelope's
//! `errors` array. All GraphQL-level failures are carried there with HTTP 200;
//! nothing here ever becomes a transport-level status code.

use std::fmt;

use async_graphql::ErrorExtensions;

/// Errors that can occur during GraphQL operations.
#[derive(Debug)]
pub enum GraphQLError {
    /// Schema construction failed at startup.
    SchemaBuildFailed(String),

    /// A required variable is missing or malformed.
    Validation(String),

    /// The requested `operationName` is not defined in the document.
    OperationNotFound(String),

    /// The referenced document does not exist.
    NotFound {
        /// Document ID.
        id: String,
    },

    /// Unexpected failure. The detail is logged server-side and never
    /// surfaced to the client.
    Internal(String),
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaBuildFailed(msg) => {
                write!(f, "Failed to build GraphQL schema: {msg}")
            }
            Self::Validation(msg) => {
                write!(f, "Validation error: {msg}")
            }
            Self::OperationNotFound(name) => {
                write!(f, "Unknown operation: {name}")
            }
            Self::NotFound { id } => {
                write!(f, "Document {id} not found")
            }
            Self::Internal(msg) => {
                write!(f, "Internal error: {msg}")
            }
        }
    }
}

impl std::error::Error for GraphQLError {}

impl GraphQLError {
    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaBuildFailed(_) => "SCHEMA_BUILD_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::OperationNotFound(_) => "OPERATION_NOT_FOUND",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message surfaced to clients. Internal failures get a generic
    /// wording; everything else is safe to show as-is.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) | Self::SchemaBuildFailed(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Converts this error into an `async_graphql::Error` carrying the
    /// machine-readable code in `extensions.code`.
    #[must_use]
    pub fn into_graphql(self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.client_message()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<careapi_storage::StorageError> for GraphQLError {
    fn from(err: careapi_storage::StorageError) -> Self {
        match err {
            careapi_storage::StorageError::NotFound { id } => Self::NotFound { id },
            careapi_storage::StorageError::AlreadyExists { id } => {
                Self::Validation(format!("document {id} already exists"))
            }
            careapi_storage::StorageError::InvalidDocument { message } => Self::Validation(message),
            careapi_storage::StorageError::Internal { message } => Self::Internal(message),
        }
    }
}

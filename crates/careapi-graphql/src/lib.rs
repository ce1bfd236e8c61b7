//! # careapi-graphql
//!
//! GraphQL API layer for the CareApi microservice.
//!
//! This crate provides the gateway between the HTTP transport and the
//! document storage abstraction:
//!
//! - A dynamically built schema exposing the five CRUD operations
//!   (`list`, `get`, `create`, `update`, `delete`)
//! - Resolvers that execute operations against the injected storage
//! - The response envelope (`data` XOR `errors`, always HTTP 200)
//! - The error taxonomy surfaced in `errors[].extensions.code`
//!
//! ## Overview
//!
//! The schema is built once at startup from the closed operation table; an
//! `operationName` outside that table, or a request missing its required
//! variables, comes back as an entry in the `errors` array rather than a
//! transport failure.
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`operations`] - The operation table and fingerprint messages
//! - [`schema`] - Schema building
//! - [`context`] - GraphQL execution context
//! - [`handler`] - Axum HTTP handler
//! - [`error`] - Error types for GraphQL operations

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod operations;
pub mod resolvers;
pub mod schema;

// Re-export main types
pub use config::GraphQLConfig;
pub use context::GraphQLContext;
pub use error::GraphQLError;
pub use handler::{GraphQLRequest, GraphQLResponse, GraphQLState, graphql_handler};
pub use operations::Operation;
pub use schema::{CareSchemaBuilder, SchemaBuilderConfig};

/// Result type for GraphQL operations.
pub type Result<T> = std::result::Result<T, GraphQLError>;

//! List query resolver.
//!
//! Implements the `list` query returning one result per stored document,
//! ordered by `_id`.

use async_graphql::Value;
use async_graphql::dynamic::{FieldFuture, ResolverContext};
use tracing::{debug, warn};

use super::{get_graphql_context, operation_result, storage_error_to_graphql};
use crate::operations::Operation;

/// Resolver for the list operation.
pub struct ListResolver;

impl ListResolver {
    /// Creates the resolver function for the `list` field.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(request_id = %gql_ctx.request_id, "Resolving list query");

                let documents = gql_ctx.storage.list().await.map_err(|e| {
                    warn!(error = %e, "Storage error listing documents");
                    storage_error_to_graphql(e)
                })?;

                let entries: Vec<Value> = documents
                    .into_iter()
                    .map(|stored| {
                        operation_result(Operation::List, Some(&stored.id), Some(stored.document))
                    })
                    .collect();

                debug!(count = entries.len(), "List completed");

                Ok(Some(Value::List(entries)))
            })
        }
    }
}

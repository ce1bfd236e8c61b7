//! Single document read resolver.
//!
//! Implements the `get(_id: "123")` query fetching a single document by its
//! ID. A missing document is an error, not a null result: clients rely on the
//! NOT_FOUND code to distinguish absence from an empty payload.

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use tracing::{debug, warn};

use super::{get_graphql_context, operation_result, require_id_argument, storage_error_to_graphql};
use crate::error::GraphQLError;
use crate::operations::Operation;

/// Resolver for single document read operations.
pub struct ReadResolver;

impl ReadResolver {
    /// Creates the resolver function for the `get` field.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let id = require_id_argument(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(id = %id, request_id = %gql_ctx.request_id, "Resolving single document read");

                let result = gql_ctx.storage.get(&id).await.map_err(|e| {
                    warn!(error = %e, "Storage error reading document");
                    storage_error_to_graphql(e)
                })?;

                match result {
                    Some(stored) => Ok(Some(operation_result(
                        Operation::Get,
                        Some(&stored.id),
                        Some(stored.document),
                    ))),
                    None => {
                        debug!(id = %id, "Document not found");
                        Err(GraphQLError::NotFound { id }.into_graphql())
                    }
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReadResolver;

    #[test]
    fn test_read_resolver_created() {
        let _resolver = ReadResolver::resolve();
    }
}

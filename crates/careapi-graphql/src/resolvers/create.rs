//! Create mutation resolver.
//!
//! Handles the `create(input: ...)` mutation. The payload is opaque apart
//! from an optional `_id`; when none is supplied the storage backend assigns
//! one, and the result carries it so clients can fetch the document back.

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use tracing::{debug, warn};

use super::{
    get_graphql_context, operation_result, require_input_argument, storage_error_to_graphql,
};
use crate::operations::Operation;

/// Resolver for document creation mutations.
pub struct CreateResolver;

impl CreateResolver {
    /// Creates the resolver function for the `create` field.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let payload = require_input_argument(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(request_id = %gql_ctx.request_id, "Processing create mutation");

                let stored = gql_ctx.storage.create(&payload).await.map_err(|e| {
                    warn!(error = %e, "Create failed");
                    storage_error_to_graphql(e)
                })?;

                debug!(
                    id = %stored.id,
                    version_id = %stored.version_id,
                    "Document created"
                );

                Ok(Some(operation_result(
                    Operation::Create,
                    Some(&stored.id),
                    Some(stored.document),
                )))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CreateResolver;

    #[test]
    fn test_create_resolver_created() {
        let _resolver = CreateResolver::resolve();
    }
}

//! Update mutation resolver.
//!
//! Handles the `update(input: ...)` mutation. The payload must carry the
//! `_id` of the document to replace; updating an absent document is a
//! NOT_FOUND error.

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use tracing::{debug, warn};

use super::{
    get_graphql_context, operation_result, require_input_argument, storage_error_to_graphql,
};
use crate::operations::Operation;

/// Resolver for document update mutations.
pub struct UpdateResolver;

impl UpdateResolver {
    /// Creates the resolver function for the `update` field.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let payload = require_input_argument(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(request_id = %gql_ctx.request_id, "Processing update mutation");

                let stored = gql_ctx.storage.update(&payload).await.map_err(|e| {
                    warn!(error = %e, "Update failed");
                    storage_error_to_graphql(e)
                })?;

                debug!(
                    id = %stored.id,
                    version_id = %stored.version_id,
                    "Document updated"
                );

                Ok(Some(operation_result(
                    Operation::Update,
                    Some(&stored.id),
                    Some(stored.document),
                )))
            })
        }
    }
}

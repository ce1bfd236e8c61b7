//! Delete mutation resolver.
//!
//! Handles the `delete(_id: "123")` mutation. Deleting an absent document is
//! a NOT_FOUND error, so a second delete of the same ID fails rather than
//! succeeding silently.

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use tracing::{debug, warn};

use super::{get_graphql_context, operation_result, require_id_argument, storage_error_to_graphql};
use crate::operations::Operation;

/// Resolver for document delete mutations.
pub struct DeleteResolver;

impl DeleteResolver {
    /// Creates the resolver function for the `delete` field.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            FieldFuture::new(async move {
                let id = require_id_argument(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                debug!(id = %id, request_id = %gql_ctx.request_id, "Processing delete mutation");

                gql_ctx.storage.delete(&id).await.map_err(|e| {
                    warn!(error = %e, id = %id, "Delete failed");
                    storage_error_to_graphql(e)
                })?;

                debug!(id = %id, "Document deleted");

                Ok(Some(operation_result(Operation::Delete, Some(&id), None)))
            })
        }
    }
}

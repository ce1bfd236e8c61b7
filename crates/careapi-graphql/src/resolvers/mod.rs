//! GraphQL resolvers for the CareApi operations.
//!
//! One resolver per operation:
//! - `list`: all stored documents (`list { message }`)
//! - `read`: single document queries (`get(_id: "123")`)
//! - `create`/`update`/`delete`: the mutations
//!
//! Every resolver returns a result object carrying the operation's fingerprint
//! message plus, where applicable, the affected `_id` and the stored payload.

mod create;
mod delete;
mod list;
mod read;
mod update;

pub use create::CreateResolver;
pub use delete::DeleteResolver;
pub use list::ListResolver;
pub use read::ReadResolver;
pub use update::UpdateResolver;

use async_graphql::dynamic::{ResolverContext, ValueAccessor};
use async_graphql::{Error as ResolverError, Value};

use crate::context::GraphQLContext;
use crate::error::GraphQLError;
use crate::operations::Operation;

/// Helper to extract GraphQL context from resolver context.
pub(crate) fn get_graphql_context<'a>(
    ctx: &'a ResolverContext<'_>,
) -> Result<&'a GraphQLContext, ResolverError> {
    ctx.data::<GraphQLContext>()
        .map_err(|_| ResolverError::new("GraphQL context not available"))
}

/// Builds the result object returned by an operation.
pub(crate) fn operation_result(
    operation: Operation,
    id: Option<&str>,
    document: Option<serde_json::Value>,
) -> Value {
    let mut map = async_graphql::indexmap::IndexMap::new();
    map.insert(
        async_graphql::Name::new("message"),
        Value::String(operation.message().to_string()),
    );
    map.insert(
        async_graphql::Name::new("_id"),
        match id {
            Some(id) => Value::String(id.to_string()),
            None => Value::Null,
        },
    );
    map.insert(
        async_graphql::Name::new("document"),
        match document {
            Some(doc) => json_to_graphql_value(doc),
            None => Value::Null,
        },
    );
    Value::Object(map)
}

/// Extracts a required, non-empty `_id` argument.
pub(crate) fn require_id_argument(ctx: &ResolverContext<'_>) -> Result<String, ResolverError> {
    let id = ctx
        .args
        .get("_id")
        .and_then(|v| v.string().ok())
        .ok_or_else(|| {
            GraphQLError::Validation("missing required variable '_id'".into()).into_graphql()
        })?;

    if id.is_empty() {
        return Err(GraphQLError::Validation("'_id' must not be empty".into()).into_graphql());
    }

    Ok(id.to_string())
}

/// Extracts a required `input` argument as a JSON object.
pub(crate) fn require_input_argument(
    ctx: &ResolverContext<'_>,
) -> Result<serde_json::Value, ResolverError> {
    let input = ctx.args.get("input").ok_or_else(|| {
        GraphQLError::Validation("missing required variable 'input'".into()).into_graphql()
    })?;

    let payload = value_accessor_to_json(&input);
    if !payload.is_object() {
        return Err(
            GraphQLError::Validation("'input' must be a JSON object".into()).into_graphql(),
        );
    }

    Ok(payload)
}

/// Converts a storage error to a GraphQL error with a code in extensions.
pub(crate) fn storage_error_to_graphql(error: careapi_storage::StorageError) -> ResolverError {
    GraphQLError::from(error).into_graphql()
}

/// Convert a serde_json::Value to async_graphql::Value.
pub(crate) fn json_to_graphql_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                Value::Number(
                    async_graphql::Number::from_f64(f)
                        .unwrap_or_else(|| async_graphql::Number::from(0)),
                )
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::List(arr.into_iter().map(json_to_graphql_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: async_graphql::indexmap::IndexMap<async_graphql::Name, Value> = obj
                .into_iter()
                .map(|(k, v)| (async_graphql::Name::new(k), json_to_graphql_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}

/// Converts a ValueAccessor to serde_json::Value.
pub(crate) fn value_accessor_to_json(value: &ValueAccessor<'_>) -> serde_json::Value {
    if value.is_null() {
        return serde_json::Value::Null;
    }

    if let Ok(b) = value.boolean() {
        return serde_json::Value::Bool(b);
    }

    if let Ok(i) = value.i64() {
        return serde_json::Value::Number(i.into());
    }

    if let Ok(f) = value.f64() {
        return serde_json::json!(f);
    }

    if let Ok(s) = value.string() {
        return serde_json::Value::String(s.to_string());
    }

    if let Ok(list) = value.list() {
        let items: Vec<serde_json::Value> =
            list.iter().map(|v| value_accessor_to_json(&v)).collect();
        return serde_json::Value::Array(items);
    }

    if let Ok(obj) = value.object() {
        let mut map = serde_json::Map::new();
        for (k, v) in obj.iter() {
            map.insert(k.to_string(), value_accessor_to_json(&v));
        }
        return serde_json::Value::Object(map);
    }

    serde_json::Value::Null
}

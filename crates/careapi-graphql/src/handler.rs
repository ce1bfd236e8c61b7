//! Axum HTTP handler for the GraphQL endpoint.
//!
//! The handler accepts `POST /graphql` with a `{query, operationName,
//! variables}` body and returns the response envelope with HTTP 200 whether
//! or not the operation succeeded. GraphQL-level failures live in the
//! envelope's `errors` array, never in the HTTP status.

use async_graphql::dynamic::Schema;
use async_graphql::{Request, Response, ServerError, Variables};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::GraphQLContext;
use careapi_storage::DynStorage;

/// State shared across GraphQL handler invocations.
#[derive(Clone)]
pub struct GraphQLState {
    /// The schema built at startup.
    pub schema: Schema,

    /// Document storage injected into each request's context.
    pub storage: DynStorage,
}

/// GraphQL request body.
#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL query string.
    pub query: String,

    /// Optional operation name for multi-operation documents.
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,

    /// Optional variables for the query.
    pub variables: Option<serde_json::Value>,

    /// Optional extensions. Accepted for wire compatibility, ignored.
    pub extensions: Option<serde_json::Value>,
}

/// The response envelope.
///
/// `data` and `errors` are mutually exclusive: whenever any requested field
/// failed, `data` is suppressed entirely.
#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<serde_json::Value>,
}

impl From<Response> for GraphQLResponse {
    fn from(resp: Response) -> Self {
        let errors: Vec<serde_json::Value> = resp.errors.iter().map(server_error_to_json).collect();

        let data = if errors.is_empty() {
            let data_json = serde_json::to_value(&resp.data).unwrap_or(serde_json::Value::Null);
            if data_json.is_null() {
                None
            } else {
                Some(data_json)
            }
        } else {
            None
        };

        Self { data, errors }
    }
}

/// Serializes one execution error into the wire shape.
fn server_error_to_json(error: &ServerError) -> serde_json::Value {
    let mut obj = serde_json::json!({ "message": error.message });

    if !error.locations.is_empty() {
        obj["locations"] =
            serde_json::to_value(&error.locations).unwrap_or(serde_json::Value::Null);
    }
    if !error.path.is_empty() {
        obj["path"] = serde_json::to_value(&error.path).unwrap_or(serde_json::Value::Null);
    }
    if let Some(extensions) = &error.extensions {
        obj["extensions"] = serde_json::to_value(extensions).unwrap_or(serde_json::Value::Null);
    }

    obj
}

/// Handles POST requests to /graphql.
///
/// Malformed HTTP bodies are rejected by the `Json` extractor with a 4xx
/// status before this handler runs; everything past that point answers 200.
pub async fn graphql_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    Json(request): Json<GraphQLRequest>,
) -> impl IntoResponse {
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    debug!(
        request_id = %request_id,
        operation = ?request.operation_name,
        "Processing GraphQL request"
    );

    let context = GraphQLContext::new(state.storage.clone()).with_request_id(request_id);

    let mut gql_request = Request::new(&request.query);

    if let Some(op_name) = request.operation_name {
        gql_request = gql_request.operation_name(op_name);
    }

    if let Some(vars) = request.variables {
        gql_request = gql_request.variables(Variables::from_json(vars));
    }

    gql_request = gql_request.data(context);

    let response = state.schema.execute(gql_request).await;
    let gql_response = GraphQLResponse::from(response);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(gql_response),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_request_deserialize() {
        let json = r#"{
            "query": "query List { list { message } }",
            "operationName": "List",
            "variables": {"_id": "mock_id"}
        }"#;

        let request: GraphQLRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.query, "query List { list { message } }");
        assert_eq!(request.operation_name, Some("List".to_string()));
        assert!(request.variables.is_some());
    }

    #[test]
    fn test_graphql_request_minimal() {
        let json = r#"{"query": "{ list { message } }"}"#;

        let request: GraphQLRequest = serde_json::from_str(json).unwrap();
        assert!(request.operation_name.is_none());
        assert!(request.variables.is_none());
        assert!(request.extensions.is_none());
    }

    #[test]
    fn test_envelope_suppresses_data_on_errors() {
        let response = Response::from_errors(vec![ServerError::new("boom", None)]);
        let envelope = GraphQLResponse::from(response);

        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0]["message"], "boom");
    }

    #[test]
    fn test_envelope_omits_errors_on_success() {
        let data =
            async_graphql::Value::from_json(serde_json::json!({"list": []})).unwrap();
        let response = Response::new(data);
        let envelope = GraphQLResponse::from(response);

        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.data, Some(serde_json::json!({"list": []})));

        // The serialized envelope must not carry an errors key at all
        let wire = serde_json::to_value(&envelope).unwrap();
        assert!(wire.get("errors").is_none());
        assert!(wire.get("data").is_some());
    }
}

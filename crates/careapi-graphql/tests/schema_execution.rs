//! Gateway-level tests executing operations directly against the schema,
//! without the HTTP transport.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{Value, json};

use careapi_db_memory::InMemoryStorage;
use careapi_graphql::{
    CareSchemaBuilder, GraphQLContext, GraphQLResponse, SchemaBuilderConfig,
};
use careapi_storage::{DocumentStorage, DynStorage};

const QUERY: &str = r#"
  query List {
    list {
      message
      _id
    }
  }
  query Get($_id: String!) {
    get(_id: $_id) {
      message
      document
    }
  }
  mutation Create($input: CareApiInput) {
    create(input: $input) {
      message
      _id
    }
  }
  mutation Update($input: CareApiInput) {
    update(input: $input) {
      message
      document
    }
  }
  mutation Delete($_id: String!) {
    delete(_id: $_id) {
      message
    }
  }
"#;

async fn seeded_storage() -> DynStorage {
    let storage: DynStorage = Arc::new(InMemoryStorage::new());
    storage
        .create(&json!({"_id": "mock_id", "name": "CareApi", "active": true}))
        .await
        .unwrap();
    storage
}

async fn execute(storage: &DynStorage, operation: &str, variables: Value) -> Value {
    let schema = CareSchemaBuilder::new(SchemaBuilderConfig::default())
        .build()
        .expect("schema should build");

    let request = Request::new(QUERY)
        .operation_name(operation)
        .variables(Variables::from_json(variables))
        .data(GraphQLContext::new(storage.clone()));

    let response = schema.execute(request).await;
    serde_json::to_value(GraphQLResponse::from(response)).unwrap()
}

#[tokio::test]
async fn list_returns_fingerprint_for_every_document() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "List", json!({})).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["list"][0]["message"],
        "GET API for CareApi microservice"
    );
    assert_eq!(body["data"]["list"][0]["_id"], "mock_id");
}

#[tokio::test]
async fn get_returns_the_stored_document() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Get", json!({"_id": "mock_id"})).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["get"]["message"],
        "GET by ID API for CareApi microservice"
    );
    assert_eq!(body["data"]["get"]["document"]["name"], "CareApi");
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Create", json!({"input": {"name": "fresh"}})).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["create"]["message"],
        "POST API for CareApi microservice"
    );

    let id = body["data"]["create"]["_id"].as_str().unwrap().to_string();
    let body = execute(&storage, "Get", json!({"_id": id})).await;
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["get"]["document"]["name"], "fresh");
}

#[tokio::test]
async fn update_replaces_the_payload() {
    let storage = seeded_storage().await;
    let body = execute(
        &storage,
        "Update",
        json!({"input": {"_id": "mock_id", "name": "renamed"}}),
    )
    .await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["update"]["message"],
        "PUT API for CareApi microservice"
    );

    let body = execute(&storage, "Get", json!({"_id": "mock_id"})).await;
    assert_eq!(body["data"]["get"]["document"]["name"], "renamed");
    assert!(body["data"]["get"]["document"].get("active").is_none());
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Delete", json!({"_id": "mock_id"})).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["delete"]["message"],
        "DELETE API for CareApi microservice"
    );

    let body = execute(&storage, "Get", json!({"_id": "mock_id"})).await;
    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn second_delete_reports_not_found() {
    let storage = seeded_storage().await;
    execute(&storage, "Delete", json!({"_id": "mock_id"})).await;

    let body = execute(&storage, "Delete", json!({"_id": "mock_id"})).await;
    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_operation_name_yields_errors_without_data() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Bogus", json!({})).await;

    assert!(body.get("data").is_none());
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_variable_yields_errors_without_data() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Get", json!({})).await;

    assert!(body.get("data").is_none());
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_input_variable_yields_validation_error() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Create", json!({})).await;

    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_object_input_yields_validation_error() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Create", json!({"input": "not an object"})).await;

    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_without_id_yields_validation_error() {
    let storage = seeded_storage().await;
    let body = execute(&storage, "Update", json!({"input": {"name": "orphan"}})).await;

    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
}

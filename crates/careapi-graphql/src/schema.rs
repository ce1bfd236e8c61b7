//! CareApi GraphQL schema builder.
//!
//! This module provides `CareSchemaBuilder`, which constructs the schema with
//! async-graphql's dynamic API. The operation table is consumed exhaustively
//! during construction and `finish()` validates the result, so the dispatch
//! surface is fixed before the server accepts its first request.

use async_graphql::Value;
use async_graphql::dynamic::{
    Field, FieldFuture, InputValue, Object, Scalar, Schema, SchemaBuilder, TypeRef,
};
use tracing::debug;

use crate::error::GraphQLError;
use crate::operations::Operation;
use crate::resolvers::{
    CreateResolver, DeleteResolver, ListResolver, ReadResolver, UpdateResolver,
};

/// The name of the opaque input scalar accepted by create and update.
pub const CARE_INPUT_SCALAR: &str = "CareApiInput";

/// The name of the scalar carrying a stored document as JSON.
pub const CARE_DOCUMENT_SCALAR: &str = "CareDocument";

/// The name of the result object returned by every operation.
pub const RESULT_TYPE: &str = "CareApiResult";

/// Configuration for the schema builder.
#[derive(Debug, Clone)]
pub struct SchemaBuilderConfig {
    /// Maximum query depth allowed.
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    pub max_complexity: usize,

    /// Whether to enable introspection queries.
    pub introspection_enabled: bool,
}

impl Default for SchemaBuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_complexity: 200,
            introspection_enabled: true,
        }
    }
}

/// Builds the CareApi GraphQL schema.
///
/// The schema exposes the five CRUD operations over the document resource:
/// `list` and `get` on the Query root, `create`, `update`, and `delete` on
/// the Mutation root. Each returns a `CareApiResult` with the operation's
/// fingerprint message.
///
/// # Example
///
/// ```ignore
/// let schema = CareSchemaBuilder::new(SchemaBuilderConfig::default()).build()?;
/// ```
pub struct CareSchemaBuilder {
    /// Configuration options.
    config: SchemaBuilderConfig,
}

impl CareSchemaBuilder {
    /// Creates a new schema builder.
    #[must_use]
    pub fn new(config: SchemaBuilderConfig) -> Self {
        Self { config }
    }

    /// Builds the GraphQL schema.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::SchemaBuildFailed` if schema construction fails.
    pub fn build(&self) -> Result<Schema, GraphQLError> {
        debug!("Starting GraphQL schema build");

        let mut schema_builder = Schema::build("Query", Some("Mutation"), None);

        schema_builder = self.register_scalars(schema_builder);
        schema_builder = schema_builder.register(Self::build_result_type());
        schema_builder = schema_builder.register(Self::build_root(false));
        schema_builder = schema_builder.register(Self::build_root(true));

        let mut schema_builder = schema_builder
            .limit_depth(self.config.max_depth)
            .limit_complexity(self.config.max_complexity);

        if !self.config.introspection_enabled {
            schema_builder = schema_builder.disable_introspection();
        }

        let schema = schema_builder
            .finish()
            .map_err(|e| GraphQLError::SchemaBuildFailed(e.to_string()))?;

        debug!("GraphQL schema build complete");
        Ok(schema)
    }

    /// Registers the opaque payload scalars.
    fn register_scalars(&self, builder: SchemaBuilder) -> SchemaBuilder {
        let scalars = [
            (
                CARE_INPUT_SCALAR,
                "Input payload for create and update, accepted as opaque JSON",
            ),
            (CARE_DOCUMENT_SCALAR, "A stored document rendered as JSON"),
        ];

        let mut builder = builder;
        for (name, description) in scalars {
            let scalar = Scalar::new(name).description(description);
            builder = builder.register(scalar);
        }

        builder
    }

    /// Builds the result object type shared by all operations.
    fn build_result_type() -> Object {
        Object::new(RESULT_TYPE)
            .description("Outcome of a CareApi operation")
            .field(
                Self::result_field("message", TypeRef::named_nn(TypeRef::STRING))
                    .description("Which verb handled the request"),
            )
            .field(
                Self::result_field("_id", TypeRef::named(TypeRef::STRING))
                    .description("The affected document ID"),
            )
            .field(
                Self::result_field("document", TypeRef::named(CARE_DOCUMENT_SCALAR))
                    .description("The stored document payload"),
            )
    }

    /// Creates a field that reads its value from the parent result object.
    fn result_field(name: &'static str, type_ref: TypeRef) -> Field {
        Field::new(name, type_ref, move |ctx| {
            FieldFuture::new(async move {
                if let Some(Value::Object(obj)) = ctx.parent_value.as_value() {
                    if let Some(value) = obj.get(name) {
                        return Ok(Some(value.clone()));
                    }
                }
                Ok(None)
            })
        })
    }

    /// Builds the Query or Mutation root from the operation table.
    fn build_root(mutation: bool) -> Object {
        let name = if mutation { "Mutation" } else { "Query" };
        let mut root = Object::new(name);
        for operation in Operation::ALL {
            if operation.is_mutation() == mutation {
                root = root.field(Self::operation_field(operation));
            }
        }
        root
    }

    /// Builds the field (resolver plus arguments) for one operation.
    fn operation_field(operation: Operation) -> Field {
        let field_name = operation.field_name();
        match operation {
            Operation::List => Field::new(
                field_name,
                TypeRef::named_nn_list_nn(RESULT_TYPE),
                ListResolver::resolve(),
            ),
            Operation::Get => Field::new(
                field_name,
                TypeRef::named_nn(RESULT_TYPE),
                ReadResolver::resolve(),
            )
            .argument(InputValue::new("_id", TypeRef::named_nn(TypeRef::STRING))),
            Operation::Create => Field::new(
                field_name,
                TypeRef::named_nn(RESULT_TYPE),
                CreateResolver::resolve(),
            )
            .argument(InputValue::new("input", TypeRef::named(CARE_INPUT_SCALAR))),
            Operation::Update => Field::new(
                field_name,
                TypeRef::named_nn(RESULT_TYPE),
                UpdateResolver::resolve(),
            )
            .argument(InputValue::new("input", TypeRef::named(CARE_INPUT_SCALAR))),
            Operation::Delete => Field::new(
                field_name,
                TypeRef::named_nn(RESULT_TYPE),
                DeleteResolver::resolve(),
            )
            .argument(InputValue::new("_id", TypeRef::named_nn(TypeRef::STRING))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builds() {
        let schema = CareSchemaBuilder::new(SchemaBuilderConfig::default())
            .build()
            .expect("schema should build");

        let sdl = schema.sdl();
        for operation in Operation::ALL {
            assert!(
                sdl.contains(operation.field_name()),
                "SDL is missing the '{}' field",
                operation.field_name()
            );
        }
        assert!(sdl.contains(CARE_INPUT_SCALAR));
        assert!(sdl.contains(CARE_DOCUMENT_SCALAR));
        assert!(sdl.contains(RESULT_TYPE));
    }

    #[test]
    fn test_schema_builds_without_introspection() {
        let config = SchemaBuilderConfig {
            introspection_enabled: false,
            ..SchemaBuilderConfig::default()
        };
        assert!(CareSchemaBuilder::new(config).build().is_ok());
    }
}

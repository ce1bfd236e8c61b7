//! The operation table for the CareApi GraphQL schema.
//!
//! The five operations are a closed set. The schema builder iterates
//! [`Operation::ALL`] when registering fields, so adding a variant without a
//! resolver fails at startup rather than at request time.

/// One of the five operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Returns every stored document.
    List,
    /// Returns a single document by `_id`.
    Get,
    /// Creates a new document.
    Create,
    /// Replaces an existing document's payload.
    Update,
    /// Removes a document by `_id`.
    Delete,
}

impl Operation {
    /// All operations, in schema registration order.
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// The GraphQL field name of this operation.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// The fingerprint message returned in every result of this operation.
    ///
    /// These strings are part of the public contract; clients match on them
    /// verbatim.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::List => "GET API for CareApi microservice",
            Self::Get => "GET by ID API for CareApi microservice",
            Self::Create => "POST API for CareApi microservice",
            Self::Update => "PUT API for CareApi microservice",
            Self::Delete => "DELETE API for CareApi microservice",
        }
    }

    /// Returns whether this operation lives on the Mutation root.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = Operation::ALL.iter().map(|op| op.field_name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_messages_are_nonempty_and_distinct() {
        let messages: HashSet<&str> = Operation::ALL.iter().map(|op| op.message()).collect();
        assert_eq!(messages.len(), Operation::ALL.len());
        assert!(messages.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_root_split() {
        assert!(!Operation::List.is_mutation());
        assert!(!Operation::Get.is_mutation());
        assert!(Operation::Create.is_mutation());
        assert!(Operation::Update.is_mutation());
        assert!(Operation::Delete.is_mutation());
    }
}

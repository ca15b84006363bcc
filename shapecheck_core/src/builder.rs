//! Builder pattern for constructing schemas programmatically.
//!
//! Compiling a raw declaration is the usual path; these builders cover the
//! other one, where a schema is assembled in code with a fluent API.

use crate::{FieldSchema, Schema, SchemaChildren};
use serde_json::Value;

/// Builder for creating a [`FieldSchema`].
///
/// # Example
///
/// ```rust
/// use shapecheck_core::{FieldSchemaBuilder, tags};
/// use serde_json::json;
///
/// let field = FieldSchemaBuilder::new(tags::STRING)
///     .required(true)
///     .allowed_values([json!("admin"), json!("user")])
///     .build();
///
/// assert!(field.required);
/// assert_eq!(field.allowed_values.unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct FieldSchemaBuilder {
    field: FieldSchema,
}

impl FieldSchemaBuilder {
    /// Creates a builder for the given type tag.
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            field: FieldSchema::new(type_tag),
        }
    }

    /// Sets whether an absent value fails validation.
    pub fn required(mut self, required: bool) -> Self {
        self.field.required = required;
        self
    }

    /// Sets the ordered set of allowed literal values.
    pub fn allowed_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.field.allowed_values = Some(values.into_iter().collect());
        self
    }

    /// Sets a nested record schema (for the record type tag).
    pub fn child_schema(mut self, schema: Schema) -> Self {
        self.field.children = Some(SchemaChildren::Record(schema));
        self
    }

    /// Sets the sequence alternatives (for the sequence type tag).
    pub fn alternatives(mut self, alternatives: impl IntoIterator<Item = FieldSchema>) -> Self {
        self.field.children = Some(SchemaChildren::Alternatives(
            alternatives.into_iter().collect(),
        ));
        self
    }

    /// Builds the field schema.
    pub fn build(self) -> FieldSchema {
        self.field
    }
}

/// Builder for creating a [`Schema`].
///
/// # Example
///
/// ```rust
/// use shapecheck_core::{FieldSchemaBuilder, SchemaBuilder, tags};
///
/// let schema = SchemaBuilder::new()
///     .field("id", FieldSchemaBuilder::new(tags::STRING).required(true).build())
///     .build();
///
/// assert_eq!(schema.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field declaration.
    pub fn field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.schema.insert(name, field);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_field_builder_minimal() {
        let field = FieldSchemaBuilder::new(tags::BOOLEAN).build();
        assert_eq!(field, FieldSchema::new(tags::BOOLEAN));
    }

    #[test]
    fn test_field_builder_full() {
        let field = FieldSchemaBuilder::new(tags::STRING)
            .required(true)
            .allowed_values([json!("a"), json!("b")])
            .build();

        assert_eq!(field.type_tag, "string");
        assert!(field.required);
        assert_eq!(field.allowed_values, Some(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn test_nested_builders() {
        let schema = SchemaBuilder::new()
            .field(
                "profile",
                FieldSchemaBuilder::new(tags::OBJECT)
                    .child_schema(
                        SchemaBuilder::new()
                            .field("name", FieldSchemaBuilder::new(tags::STRING).build())
                            .build(),
                    )
                    .build(),
            )
            .field(
                "scores",
                FieldSchemaBuilder::new(tags::ARRAY)
                    .alternatives([FieldSchema::new(tags::NUMBER)])
                    .build(),
            )
            .build();

        let profile = schema.get("profile").unwrap();
        assert!(profile.record_children().unwrap().contains("name"));

        let scores = schema.get("scores").unwrap();
        assert_eq!(scores.alternative_children().unwrap().len(), 1);
    }
}

//! Canonical schema types.
//!
//! This module contains the compiled form every schema declaration is
//! normalized into: a tree of [`FieldSchema`] nodes, keyed by field name at
//! record levels and held as ordered alternatives at sequence levels.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Type tags of the built-in plugins.
///
/// The registry of the validation engine maps each of these tags to its
/// strategy object. A `FieldSchema` whose tag resolves to no registered
/// plugin is rejected at compilation time.
pub mod tags {
    /// UTF-8 string values.
    pub const STRING: &str = "string";
    /// Numeric values (integer or floating point).
    pub const NUMBER: &str = "number";
    /// Boolean values.
    pub const BOOLEAN: &str = "boolean";
    /// Date or datetime values carried as strings.
    pub const DATE: &str = "date";
    /// Keyed, closed-world records.
    pub const OBJECT: &str = "object";
    /// Sequences whose elements match one of a list of alternatives.
    pub const ARRAY: &str = "array";
}

/// The canonical per-field declaration.
///
/// A `FieldSchema` is what every shorthand or verbose declaration compiles
/// down to. It is immutable for the lifetime of the validator that owns it.
///
/// # Example
///
/// ```rust
/// use shapecheck_core::{FieldSchema, tags};
///
/// let field = FieldSchema::new(tags::STRING);
/// assert!(!field.required);
/// assert!(field.children.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    /// Tag identifying which registered plugin governs this field.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Whether an absent value fails validation.
    pub required: bool,

    /// Ordered set of allowed literal values, compared by strict equality.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,

    /// Child schemas, present exactly for the composite type tags.
    #[serde(rename = "child", skip_serializing_if = "Option::is_none")]
    pub children: Option<SchemaChildren>,
}

impl FieldSchema {
    /// Creates a minimal field schema for the given type tag.
    ///
    /// The field is optional, unconstrained, and has no children.
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            required: false,
            allowed_values: None,
            children: None,
        }
    }

    /// Returns the nested record schema, if this field declares one.
    pub fn record_children(&self) -> Option<&Schema> {
        match &self.children {
            Some(SchemaChildren::Record(schema)) => Some(schema),
            _ => None,
        }
    }

    /// Returns the sequence alternatives, if this field declares them.
    pub fn alternative_children(&self) -> Option<&[FieldSchema]> {
        match &self.children {
            Some(SchemaChildren::Alternatives(alternatives)) => Some(alternatives),
            _ => None,
        }
    }
}

/// Child schemas of a composite field.
///
/// A keyed-record field nests a whole [`Schema`]; a sequence field carries
/// an ordered list of alternative field schemas that an element may match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaChildren {
    /// Child field name to child field schema, for the record tag.
    Record(Schema),
    /// Ordered alternatives an element may match, for the sequence tag.
    Alternatives(Vec<FieldSchema>),
}

/// A compiled record-level schema: field name to field schema.
///
/// Recursively, every record child of a [`FieldSchema`] is itself a
/// `Schema`. Iteration order is deterministic (sorted by field name).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: BTreeMap<String, FieldSchema>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field declaration.
    pub fn insert(&mut self, name: impl Into<String>, field: FieldSchema) {
        self.fields.insert(name.into(), field);
    }

    /// Looks up a field declaration by name.
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Returns true if a field with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the declared fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldSchema)> {
        self.fields.iter()
    }

    /// Iterates over the declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, FieldSchema)> for Schema {
    fn from_iter<T: IntoIterator<Item = (String, FieldSchema)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_field_schema() {
        let field = FieldSchema::new(tags::NUMBER);
        assert_eq!(field.type_tag, "number");
        assert!(!field.required);
        assert!(field.allowed_values.is_none());
        assert!(field.children.is_none());
    }

    #[test]
    fn test_children_accessors() {
        let mut nested = Schema::new();
        nested.insert("name", FieldSchema::new(tags::STRING));

        let record = FieldSchema {
            children: Some(SchemaChildren::Record(nested)),
            ..FieldSchema::new(tags::OBJECT)
        };
        assert!(record.record_children().is_some());
        assert!(record.alternative_children().is_none());

        let sequence = FieldSchema {
            children: Some(SchemaChildren::Alternatives(vec![FieldSchema::new(
                tags::STRING,
            )])),
            ..FieldSchema::new(tags::ARRAY)
        };
        assert_eq!(sequence.alternative_children().unwrap().len(), 1);
        assert!(sequence.record_children().is_none());
    }

    #[test]
    fn test_schema_operations() {
        let mut schema = Schema::new();
        assert!(schema.is_empty());

        schema.insert("id", FieldSchema::new(tags::STRING));
        schema.insert("age", FieldSchema::new(tags::NUMBER));

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("id"));
        assert!(!schema.contains("email"));
        assert_eq!(schema.get("age").unwrap().type_tag, "number");

        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["age", "id"]);
    }

    #[test]
    fn test_schema_serializes_to_mapping() {
        let mut schema = Schema::new();
        schema.insert("id", FieldSchema::new(tags::STRING));

        let rendered = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!({"id": {"type": "string", "required": false}})
        );
    }
}

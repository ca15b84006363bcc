//! Keyed-record values.

use serde_json::Value;
use shapecheck_core::{
    CompileResult, FieldSchema, SchemaChildren, SchemaFormatError, TypePlugin, tags,
};

/// Plugin for the `object` type tag: keyed, closed-world records.
///
/// The type predicate only establishes object-ness; traversal of the
/// declared child fields is the engine's job.
pub struct ObjectPlugin;

impl TypePlugin for ObjectPlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.is_object()
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        match &field.children {
            Some(SchemaChildren::Record(_)) => Ok(()),
            Some(SchemaChildren::Alternatives(_)) => Err(SchemaFormatError::malformed(
                "",
                "the 'child' of an 'object' field must be a mapping of field schemas",
            )),
            None => Err(SchemaFormatError::malformed(
                "",
                "an 'object' field must declare a 'child' schema",
            )),
        }
    }
}

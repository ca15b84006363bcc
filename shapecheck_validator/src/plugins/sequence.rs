//! Sequence values.

use serde_json::Value;
use shapecheck_core::{
    CompileResult, FieldSchema, SchemaChildren, SchemaFormatError, TypePlugin, tags,
};

/// Plugin for the `array` type tag: sequences whose elements must each
/// match one of the declared alternatives.
pub struct ArrayPlugin;

impl TypePlugin for ArrayPlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.is_array()
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        match &field.children {
            Some(SchemaChildren::Alternatives(_)) => Ok(()),
            Some(SchemaChildren::Record(_)) => Err(SchemaFormatError::malformed(
                "",
                "the 'child' of an 'array' field must be a list of alternative schemas",
            )),
            None => Err(SchemaFormatError::malformed(
                "",
                "an 'array' field must declare a 'child' list of alternatives",
            )),
        }
    }
}

//! Boolean values.

use super::reject_children;
use serde_json::Value;
use shapecheck_core::{CompileResult, FieldSchema, TypePlugin, tags};

/// Plugin for the `boolean` type tag. `false` is a present value.
pub struct BooleanPlugin;

impl TypePlugin for BooleanPlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.is_boolean()
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        reject_children(tags::BOOLEAN, field)
    }
}

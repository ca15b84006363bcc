//! Numeric values.

use super::reject_children;
use serde_json::Value;
use shapecheck_core::{CompileResult, FieldSchema, TypePlugin, tags};

/// Plugin for the `number` type tag. Integers and floats both qualify;
/// zero is a present value for `required` purposes.
pub struct NumberPlugin;

impl TypePlugin for NumberPlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.is_number()
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        reject_children(tags::NUMBER, field)
    }
}

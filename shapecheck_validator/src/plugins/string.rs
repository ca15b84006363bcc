//! String values.

use super::reject_children;
use serde_json::Value;
use shapecheck_core::{CompileResult, FieldSchema, TypePlugin, tags};

/// Plugin for the `string` type tag.
///
/// The one plugin whose emptiness differs from mere presence: a required
/// string field rejects the empty string, not just an absent value.
pub struct StringPlugin;

impl TypePlugin for StringPlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.is_string()
    }

    fn validate_required(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.as_str().is_some_and(|text| !text.is_empty())
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        reject_children(tags::STRING, field)
    }
}

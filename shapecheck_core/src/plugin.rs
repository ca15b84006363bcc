//! The type-validator plugin trait.
//!
//! Every type tag in the closed set is governed by one strategy object
//! implementing [`TypePlugin`]. The validation engine never inspects values
//! itself; it asks the plugin resolved from a field's type tag.

use crate::{CompileResult, FieldSchema};
use serde_json::Value;

/// Strategy interface for a single type tag.
///
/// Implementations are stateless and shared across threads: concurrent
/// validation calls against one compiled schema are safe by construction.
///
/// # Example
///
/// ```rust
/// use shapecheck_core::{FieldSchema, TypePlugin};
/// use serde_json::Value;
///
/// struct UppercasePlugin;
///
/// impl TypePlugin for UppercasePlugin {
///     fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
///         value
///             .as_str()
///             .is_some_and(|s| s.chars().all(char::is_uppercase))
///     }
/// }
/// ```
pub trait TypePlugin: Send + Sync {
    /// Returns true if the value matches this plugin's type.
    fn validate_type(&self, value: &Value, field: &FieldSchema) -> bool;

    /// Returns true if the value counts as present for a required field.
    ///
    /// Defaults to the type predicate, so an absent value (JSON null) fails
    /// and any well-typed value passes. Plugins whose notion of emptiness
    /// differs from mere presence override this.
    fn validate_required(&self, value: &Value, field: &FieldSchema) -> bool {
        self.validate_type(value, field)
    }

    /// Rejects field declarations that are malformed for this kind.
    ///
    /// Runs once per field at compilation time, after shorthand expansion.
    /// Errors raised here surface as [`crate::SchemaFormatError`] with the
    /// field's path attached by the compiler.
    fn validate_schema_shape(&self, _field: &FieldSchema) -> CompileResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;
    use serde_json::json;

    struct EvenNumberPlugin;

    impl TypePlugin for EvenNumberPlugin {
        fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        }
    }

    #[test]
    fn test_required_defaults_to_type_predicate() {
        let plugin = EvenNumberPlugin;
        let field = FieldSchema::new(tags::NUMBER);

        assert!(plugin.validate_required(&json!(4), &field));
        assert!(!plugin.validate_required(&json!(3), &field));
        assert!(!plugin.validate_required(&Value::Null, &field));
    }

    #[test]
    fn test_schema_shape_defaults_to_ok() {
        let plugin = EvenNumberPlugin;
        let field = FieldSchema::new(tags::NUMBER);
        assert!(plugin.validate_schema_shape(&field).is_ok());
    }
}

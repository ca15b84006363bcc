//! The validation engine.
//!
//! A compiled schema is a fixed tree; validation is a pure recursive walk
//! of a value against it. Field checks run in a set order (required, enum,
//! type, composite recursion) and the first failure wins for that field.
//! Record traversal batches sibling failures; sequence matching backtracks
//! over alternatives and reports only the final no-match.

use crate::compiler::{compile, compile_field, verify_field, verify_schema};
use crate::error::{AggregateError, FieldError, ValidationError};
use crate::path::{indexed_path, join_path};
use crate::registry::registry;
use serde::Serialize;
use serde_json::{Map, Value};
use shapecheck_core::{CompileResult, FieldSchema, Schema, SchemaChildren};
use tracing::debug;

/// The compiled top-level schema a [`Validator`] holds.
///
/// A raw declaration carrying a `type` key is a single (possibly composite)
/// field schema; any other mapping declares a keyed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RootSchema {
    /// The common case: a record of named fields.
    Record(Schema),
    /// A bare scalar or sequence at the top level.
    Field(FieldSchema),
}

/// A compiled, immutable validator for one schema declaration.
///
/// Compilation happens once, at construction; `validate` may then be called
/// any number of times, from any thread, without mutation.
///
/// # Example
///
/// ```rust
/// use shapecheck_validator::Validator;
/// use serde_json::json;
///
/// let validator = Validator::new(&json!({
///     "name": {"type": "string", "required": true},
///     "role": {"type": "string", "enum": ["admin", "user"]},
///     "tags": ["string", "number"],
/// }))
/// .unwrap();
///
/// let ok = json!({"name": "Ada", "role": "admin", "tags": ["crypto", 7]});
/// assert!(validator.validate(&ok).is_ok());
///
/// let bad = json!({"role": "root"});
/// assert!(validator.validate(&bad).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    root: RootSchema,
}

impl Validator {
    /// Compiles a raw schema declaration into a validator.
    ///
    /// Fails with a [`shapecheck_core::SchemaFormatError`] when the
    /// declaration is not a mapping or any field is malformed.
    pub fn new(raw: &Value) -> CompileResult<Self> {
        let Some(mapping) = raw.as_object() else {
            return Err(shapecheck_core::SchemaFormatError::not_a_mapping(""));
        };

        let root = if mapping.contains_key("type") {
            RootSchema::Field(compile_field(raw, "")?)
        } else {
            RootSchema::Record(compile(raw, "")?)
        };
        Ok(Self { root })
    }

    /// Wraps a programmatically built record schema.
    ///
    /// The schema's shape is verified the same way compiled declarations
    /// are, so unresolvable tags or malformed composites are caught here
    /// rather than silently skipped at validation time.
    pub fn from_schema(schema: Schema) -> CompileResult<Self> {
        verify_schema(&schema, "")?;
        Ok(Self {
            root: RootSchema::Record(schema),
        })
    }

    /// Wraps a programmatically built top-level field schema.
    pub fn from_field(field: FieldSchema) -> CompileResult<Self> {
        verify_field(&field, "")?;
        Ok(Self {
            root: RootSchema::Field(field),
        })
    }

    /// Returns the compiled top-level schema.
    pub fn root(&self) -> &RootSchema {
        &self.root
    }

    /// Checks a value against the compiled schema.
    ///
    /// A record-rooted validator reports the aggregated error model of
    /// record traversal; a bare-rooted one reports a single field error.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match &self.root {
            RootSchema::Record(schema) => {
                let Some(object) = value.as_object() else {
                    return Err(FieldError::wrong_type("").into());
                };
                validate_record(object, schema, "")?;
                Ok(())
            }
            RootSchema::Field(field) => validate_field(Some(value), field, "", ""),
        }
    }
}

/// Checks one value against one field schema.
///
/// Checks run in a fixed order (required, enum, type, composite recursion)
/// and the first failure wins for this call. An absent value (missing key or
/// JSON null) passes every check when the field is not required.
pub fn validate_field(
    value: Option<&Value>,
    field: &FieldSchema,
    name: &str,
    parent_path: &str,
) -> Result<(), ValidationError> {
    let path = join_path(parent_path, name);
    let Some(plugin) = registry().get(&field.type_tag) else {
        // Compilation rejects unknown tags; a hand-built schema that dodged
        // verification is accepted rather than guessed at.
        debug!(path = %path, type_tag = %field.type_tag, "no plugin for type tag, skipping");
        return Ok(());
    };

    let absent = !matches!(value, Some(v) if !v.is_null());
    if absent && !field.required {
        return Ok(());
    }

    let probe = value.unwrap_or(&Value::Null);
    if field.required && !plugin.validate_required(probe, field) {
        return Err(FieldError::required(path).into());
    }

    if let Some(allowed) = &field.allowed_values {
        if !allowed.contains(probe) {
            return Err(FieldError::not_in_enum(path, allowed).into());
        }
    }

    if absent {
        return Ok(());
    }

    if !plugin.validate_type(probe, field) {
        return Err(FieldError::wrong_type(path).into());
    }

    match &field.children {
        Some(SchemaChildren::Record(schema)) => {
            // The type predicate has already established object-ness.
            if let Some(object) = probe.as_object() {
                validate_record(object, schema, &path)?;
            }
            Ok(())
        }
        Some(SchemaChildren::Alternatives(alternatives)) => {
            if let Some(items) = probe.as_array() {
                validate_sequence(items, alternatives, &path)?;
            }
            Ok(())
        }
        None => Ok(()),
    }
}

/// Checks an object against a record schema, batching failures.
///
/// Iterates the schema's declared fields (not the object's keys), so a
/// failing field never stops its siblings from being checked. Keys present
/// in the object but not declared in the schema fail the call afterwards:
/// records are closed-world.
pub fn validate_record(
    object: &Map<String, Value>,
    schema: &Schema,
    path_prefix: &str,
) -> Result<(), AggregateError> {
    let mut failures = AggregateError::new();
    for (name, field) in schema.iter() {
        if let Err(error) = validate_field(object.get(name), field, name, path_prefix) {
            failures.absorb(error);
        }
    }

    let unexpected: Vec<String> = object
        .keys()
        .filter(|key| !schema.contains(key))
        .map(|key| join_path(path_prefix, key))
        .collect();
    if !unexpected.is_empty() {
        let message = if unexpected.len() == 1 {
            "The field is not expected."
        } else {
            "The fields are not expected."
        };
        failures.insert(unexpected.join(", "), message);
    }

    if failures.is_empty() {
        Ok(())
    } else {
        debug!(path = %path_prefix, failures = failures.len(), "record traversal failed");
        Err(failures)
    }
}

/// Checks each element of a sequence against the declared alternatives.
///
/// Alternatives are tried in declared order and the first that accepts the
/// element wins; failures from rejected alternatives are discarded, never
/// surfaced. An element no alternative accepts fails at its indexed path.
pub fn validate_sequence(
    items: &[Value],
    alternatives: &[FieldSchema],
    path: &str,
) -> Result<(), FieldError> {
    for (index, item) in items.iter().enumerate() {
        let matched = alternatives
            .iter()
            .any(|alternative| validate_field(Some(item), alternative, "", path).is_ok());
        if !matched {
            return Err(FieldError::wrong_type(indexed_path(path, index)));
        }
    }
    Ok(())
}

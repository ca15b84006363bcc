//! Schema compilation.
//!
//! Normalizes a raw declaration (a `serde_json::Value` mixing shorthand
//! and verbose forms) into the canonical [`Schema`] tree, rejecting
//! declarations that are not well-formed. Compilation is purely structural
//! and never inspects data values.

use crate::path::{indexed_path, join_path};
use crate::registry::registry;
use serde_json::{Map, Value};
use shapecheck_core::{CompileResult, FieldSchema, Schema, SchemaChildren, SchemaFormatError, tags};
use tracing::{debug, trace};

/// The four declaration forms a raw field can take.
///
/// Classified up front so shorthand expansion is a dispatch, not a chain of
/// runtime probes.
enum RawForm<'a> {
    /// A bare type tag, e.g. `"string"`.
    Tag(&'a str),
    /// A list of alternatives, shorthand for a sequence field.
    SequenceLiteral(&'a [Value]),
    /// A mapping without a `type` key, shorthand for a nested record.
    ShapeMapping,
    /// A mapping with a `type` key: already verbose.
    Verbose(&'a Map<String, Value>),
}

fn classify(raw: &Value) -> Option<RawForm<'_>> {
    match raw {
        Value::String(tag) => Some(RawForm::Tag(tag)),
        Value::Array(items) => Some(RawForm::SequenceLiteral(items)),
        Value::Object(mapping) if mapping.contains_key("type") => Some(RawForm::Verbose(mapping)),
        Value::Object(_) => Some(RawForm::ShapeMapping),
        _ => None,
    }
}

/// Compiles a raw record-level declaration into a [`Schema`].
///
/// Fails when `raw` is not an object-shaped mapping, or when any field
/// fails to compile.
pub fn compile(raw: &Value, parent_path: &str) -> CompileResult<Schema> {
    let Some(mapping) = raw.as_object() else {
        return Err(SchemaFormatError::not_a_mapping(parent_path));
    };

    let mut schema = Schema::new();
    for (name, raw_field) in mapping {
        let path = join_path(parent_path, name);
        schema.insert(name.clone(), compile_field(raw_field, &path)?);
    }
    trace!(path = %parent_path, fields = schema.len(), "compiled record schema");
    Ok(schema)
}

/// Compiles one raw field declaration, expanding shorthand forms.
///
/// After expansion the resolved plugin's shape validator runs, so each kind
/// rejects the mistakes specific to it.
pub fn compile_field(raw: &Value, path: &str) -> CompileResult<FieldSchema> {
    let field = match classify(raw) {
        Some(RawForm::Tag(tag)) => FieldSchema::new(tag),
        Some(RawForm::SequenceLiteral(items)) => FieldSchema {
            children: Some(SchemaChildren::Alternatives(compile_alternatives(
                items, path,
            )?)),
            ..FieldSchema::new(tags::ARRAY)
        },
        Some(RawForm::ShapeMapping) => FieldSchema {
            children: Some(SchemaChildren::Record(compile(raw, path)?)),
            ..FieldSchema::new(tags::OBJECT)
        },
        Some(RawForm::Verbose(mapping)) => compile_verbose(mapping, path)?,
        None => {
            return Err(SchemaFormatError::malformed(
                path,
                format!(
                    "expected a type tag, a list of alternatives, or a mapping, found {}",
                    json_kind(raw)
                ),
            ));
        }
    };

    let plugin = registry()
        .get(&field.type_tag)
        .ok_or_else(|| SchemaFormatError::unknown_type(path, &field.type_tag))?;
    plugin.validate_schema_shape(&field).map_err(|e| e.at(path))?;
    Ok(field)
}

/// Parses an already-verbose field declaration.
fn compile_verbose(mapping: &Map<String, Value>, path: &str) -> CompileResult<FieldSchema> {
    let type_tag = mapping
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaFormatError::malformed(path, "the 'type' key must be a type tag string"))?;

    let required = match mapping.get("required") {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(SchemaFormatError::malformed(
                path,
                format!("'required' must be a boolean, found {}", json_kind(other)),
            ));
        }
    };

    let allowed_values = match mapping.get("enum") {
        None => None,
        Some(Value::Array(values)) => Some(values.clone()),
        Some(other) => {
            return Err(SchemaFormatError::malformed(
                path,
                format!(
                    "'enum' must be a list of literal values, found {}",
                    json_kind(other)
                ),
            ));
        }
    };

    let children = match mapping.get("child") {
        None => None,
        Some(child) => Some(compile_children(child, type_tag, path)?),
    };

    for key in mapping.keys() {
        if !matches!(key.as_str(), "type" | "required" | "enum" | "child") {
            debug!(path = %path, key = %key, "ignoring unrecognized schema key");
        }
    }

    Ok(FieldSchema {
        type_tag: type_tag.to_string(),
        required,
        allowed_values,
        children,
    })
}

/// Compiles the `child` declaration of a verbose composite field.
fn compile_children(child: &Value, type_tag: &str, path: &str) -> CompileResult<SchemaChildren> {
    match type_tag {
        tags::OBJECT => Ok(SchemaChildren::Record(compile(child, path)?)),
        tags::ARRAY => {
            let Some(items) = child.as_array() else {
                return Err(SchemaFormatError::malformed(
                    path,
                    "the 'child' of an 'array' field must be a list of alternative schemas",
                ));
            };
            Ok(SchemaChildren::Alternatives(compile_alternatives(
                items, path,
            )?))
        }
        other => Err(SchemaFormatError::malformed(
            path,
            format!("'child' is not allowed on '{other}' fields"),
        )),
    }
}

fn compile_alternatives(items: &[Value], path: &str) -> CompileResult<Vec<FieldSchema>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| compile_field(item, &indexed_path(path, index)))
        .collect()
}

/// Verifies the shape of a programmatically built schema.
///
/// The compiler path checks shapes as it goes; this is the same walk for
/// schemas assembled with the builders, so an unresolvable tag or a missing
/// child list cannot reach the engine silently.
pub fn verify_schema(schema: &Schema, parent_path: &str) -> CompileResult<()> {
    for (name, field) in schema.iter() {
        verify_field(field, &join_path(parent_path, name))?;
    }
    Ok(())
}

/// Verifies the shape of one programmatically built field schema.
pub fn verify_field(field: &FieldSchema, path: &str) -> CompileResult<()> {
    let plugin = registry()
        .get(&field.type_tag)
        .ok_or_else(|| SchemaFormatError::unknown_type(path, &field.type_tag))?;
    plugin.validate_schema_shape(field).map_err(|e| e.at(path))?;

    match &field.children {
        Some(SchemaChildren::Record(schema)) => verify_schema(schema, path),
        Some(SchemaChildren::Alternatives(alternatives)) => {
            for (index, alternative) in alternatives.iter().enumerate() {
                verify_field(alternative, &indexed_path(path, index))?;
            }
            Ok(())
        }
        None => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

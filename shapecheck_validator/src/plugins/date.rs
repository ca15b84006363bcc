//! Date and datetime values.

use super::reject_children;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use shapecheck_core::{CompileResult, FieldSchema, TypePlugin, tags};

/// Plugin for the `date` type tag.
///
/// Dates travel as strings. Accepted forms: RFC 3339
/// (`2024-03-01T12:00:00Z`), `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`.
pub struct DatePlugin;

impl TypePlugin for DatePlugin {
    fn validate_type(&self, value: &Value, _field: &FieldSchema) -> bool {
        value.as_str().is_some_and(parses_as_date)
    }

    fn validate_schema_shape(&self, field: &FieldSchema) -> CompileResult<()> {
        reject_children(tags::DATE, field)
    }
}

fn parses_as_date(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

//! Error types for validation operations.
//!
//! Two run-time shapes, by design: a single-field error for any terminal
//! check, and an aggregated path-to-message collection produced only by
//! keyed-record traversal. Callers pattern-match on [`ValidationError`] to
//! tell which shape they received.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A single field failure: one path, one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted/bracketed path of the failing field; empty at the root.
    pub path: String,
    /// Human-readable failure message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error from a path and message.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a required-field failure.
    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, "The field is required.")
    }

    /// Creates a type-mismatch failure.
    pub fn wrong_type(path: impl Into<String>) -> Self {
        Self::new(path, "The field is not of the correct type.")
    }

    /// Creates an enum-membership failure listing the allowed literals.
    pub fn not_in_enum(path: impl Into<String>, allowed: &[Value]) -> Self {
        let list = allowed
            .iter()
            .map(literal_text)
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(path, format!("The field can only be one of: {list}."))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for FieldError {}

/// Renders an enum literal for an error message.
///
/// Strings render bare (no quotes); everything else as its JSON text.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Every field failure found in one record traversal, keyed by path.
///
/// Record validation is deliberately batching: a caller sees every sibling
/// problem in one pass instead of fixing one error at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregateError {
    errors: BTreeMap<String, String>,
}

impl AggregateError {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure at a path.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(path.into(), message.into());
    }

    /// Folds a validation error of either shape into this aggregate.
    ///
    /// Nested aggregates merge flat, so deep record failures keep their
    /// full dotted paths.
    pub fn absorb(&mut self, error: ValidationError) {
        match error {
            ValidationError::Field(field) => {
                self.errors.insert(field.path, field.message);
            }
            ValidationError::Aggregate(aggregate) => self.errors.extend(aggregate.errors),
        }
    }

    /// Looks up the message recorded for a path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Returns the number of recorded failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the recorded failures in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }

    /// Consumes the aggregate, returning the path-to-message mapping.
    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .errors
            .iter()
            .map(|(path, message)| format!("{path}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{rendered}")
    }
}

impl std::error::Error for AggregateError {}

/// The error returned by a failed validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A terminal scalar failure (required, enum, or type mismatch).
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Every failure found while traversing a keyed record.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

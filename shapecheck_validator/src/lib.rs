//! # Shapecheck Validator
//!
//! Schema compiler and validation engine. This crate turns a raw schema
//! declaration, with shorthand and verbose forms freely mixed, into a
//! compiled validator, then checks loosely-typed values against it:
//!
//! - Shorthand expansion (bare tags, alternative lists, nested shape maps)
//! - Required/enum/type checks per field, in a fixed order
//! - Closed-world record traversal with batched, path-keyed failures
//! - First-match-wins alternative matching for sequences
//!
//! ## Example
//!
//! ```rust
//! use shapecheck_validator::{Validator, ValidationError};
//! use serde_json::json;
//!
//! let validator = Validator::new(&json!({
//!     "firstLayer": {
//!         "name": {"type": "string", "required": true},
//!     },
//! }))
//! .unwrap();
//!
//! match validator.validate(&json!({"firstLayer": {}})) {
//!     Err(ValidationError::Aggregate(failures)) => {
//!         assert_eq!(failures.get("firstLayer.name"), Some("The field is required."));
//!     }
//!     other => panic!("expected an aggregate error, got {other:?}"),
//! }
//! ```

pub mod compiler;
pub mod engine;
pub mod error;
mod path;
pub mod plugins;
pub mod registry;

pub use compiler::{compile, compile_field, verify_field, verify_schema};
pub use engine::{RootSchema, Validator, validate_field, validate_record, validate_sequence};
pub use error::{AggregateError, FieldError, ValidationError};
pub use registry::{PluginRegistry, registry};

//! # Shapecheck Core
//!
//! Core data structures and types for the shapecheck validation engine.
//!
//! This crate provides the building blocks for describing the expected shape
//! of loosely-typed data: canonical per-field schemas, the plugin trait that
//! type-specific checks implement, and the error type raised when a schema
//! declaration itself is malformed.
//!
//! ## Key Concepts
//!
//! - **FieldSchema**: the canonical description of one field's rules
//!   (type tag, required flag, allowed values, child schemas)
//! - **Schema**: a keyed, closed-world record of field schemas
//! - **TypePlugin**: the strategy interface implemented once per type tag
//!
//! ## Example
//!
//! ```rust
//! use shapecheck_core::{FieldSchemaBuilder, SchemaBuilder, tags};
//!
//! let schema = SchemaBuilder::new()
//!     .field(
//!         "name",
//!         FieldSchemaBuilder::new(tags::STRING).required(true).build(),
//!     )
//!     .field("age", FieldSchemaBuilder::new(tags::NUMBER).build())
//!     .build();
//!
//! assert!(schema.contains("name"));
//! assert_eq!(schema.len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod plugin;
pub mod schema;

pub use builder::*;
pub use error::*;
pub use plugin::*;
pub use schema::*;

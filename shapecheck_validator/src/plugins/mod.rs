//! Built-in type-validator plugins.
//!
//! One strategy object per type tag in the closed set. Each plugin owns the
//! type predicate for its kind, the notion of emptiness a `required` check
//! uses, and the shape rules a field declaration of its kind must obey.

mod boolean;
mod date;
mod number;
mod record;
mod sequence;
mod string;

pub use boolean::BooleanPlugin;
pub use date::DatePlugin;
pub use number::NumberPlugin;
pub use record::ObjectPlugin;
pub use sequence::ArrayPlugin;
pub use string::StringPlugin;

use shapecheck_core::{CompileResult, FieldSchema, SchemaFormatError};

/// Shape rule shared by the scalar plugins: no children allowed.
pub(crate) fn reject_children(tag: &str, field: &FieldSchema) -> CompileResult<()> {
    if field.children.is_some() {
        return Err(SchemaFormatError::malformed(
            "",
            format!("'child' is not allowed on '{tag}' fields"),
        ));
    }
    Ok(())
}

//! Construction-time error type.
//!
//! A malformed schema declaration makes the validator unusable, so these
//! errors are fatal: they are raised only while compiling a declaration,
//! never during validation, and are never aggregated.

use thiserror::Error;

/// Result type for schema compilation.
pub type CompileResult<T> = std::result::Result<T, SchemaFormatError>;

/// Errors raised while compiling a raw schema declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaFormatError {
    /// The declaration (or a nested record child) is not a mapping.
    #[error("schema declaration at '{path}' is not a mapping of field names to field schemas")]
    NotAMapping {
        /// Path of the offending declaration
        path: String,
    },

    /// A field names a type tag with no registered plugin.
    #[error("unknown field type '{type_tag}' at '{path}'")]
    UnknownType {
        /// Path of the offending field
        path: String,
        /// The unresolved type tag
        type_tag: String,
    },

    /// A field declaration is structurally invalid for its kind.
    #[error("malformed field declaration at '{path}': {message}")]
    MalformedField {
        /// Path of the offending field
        path: String,
        /// What was wrong with it
        message: String,
    },
}

impl SchemaFormatError {
    /// Creates a new not-a-mapping error.
    pub fn not_a_mapping(path: impl Into<String>) -> Self {
        Self::NotAMapping {
            path: display_path(path.into()),
        }
    }

    /// Creates a new unknown-type error.
    pub fn unknown_type(path: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self::UnknownType {
            path: display_path(path.into()),
            type_tag: type_tag.into(),
        }
    }

    /// Creates a new malformed-field error.
    ///
    /// Plugins raising shape errors leave the path empty; the compiler fills
    /// it in afterwards via [`SchemaFormatError::at`].
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedField {
            path: display_path(path.into()),
            message: message.into(),
        }
    }

    /// Attaches a field path to an error raised without one.
    ///
    /// Paths already present are kept, so nested errors keep pointing at the
    /// declaration that actually failed.
    pub fn at(self, path: &str) -> Self {
        let fill = |current: String| {
            if current == ROOT_PATH {
                display_path(path.to_string())
            } else {
                current
            }
        };
        match self {
            Self::NotAMapping { path } => Self::NotAMapping { path: fill(path) },
            Self::UnknownType { path, type_tag } => Self::UnknownType {
                path: fill(path),
                type_tag,
            },
            Self::MalformedField { path, message } => Self::MalformedField {
                path: fill(path),
                message,
            },
        }
    }
}

const ROOT_PATH: &str = "<root>";

fn display_path(path: String) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path
    }
}

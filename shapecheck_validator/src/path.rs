//! Field-path formatting.
//!
//! Record nesting joins with `.`, sequence elements get a bracketed index
//! suffix; the two compose (`parent.child[3]`). The empty string is the
//! root path.

/// Joins a parent path and a field name.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{name}"),
    }
}

/// Appends a sequence index to a path.
pub(crate) fn indexed_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

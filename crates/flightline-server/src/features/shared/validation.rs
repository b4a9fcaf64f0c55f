//! Shared input normalization helpers
//!
//! Presence checks live in the validator (`validator::require`); the
//! helpers here only normalize incoming payload fields before they reach
//! it.

/// Collapse empty and whitespace-only optional strings to `None`.
///
/// Update payloads use full-replace semantics, so a client sending `""`
/// means the same thing as omitting the field.
pub fn normalized(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Apply a default when an optional field is absent or blank.
pub fn or_default(value: Option<String>, default: &str) -> String {
    normalized(value).unwrap_or_else(|| default.to_string())
}

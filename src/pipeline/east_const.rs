//! East-const rewriting of already-canonical signatures.
//!
//! This is pattern matching over canonical spacing (`T * const &`), not a grammar:
//! only the top-level qualifier shapes below are recognised, anything else passes
//! through untouched.

use crate::common::text::{strip_surrounding, split_top_level};
use crate::tree::BracketSpec;

/// `(suffix, rewritten suffix)` for `const T<suffix>` shapes, most specific first.
const CONST_SUFFIX_PATTERNS: [(&str, &str); 5] = [
    (" * const", " const * const"),
    (" * const &", " const * const &"),
    (" * &", " const * &"),
    (" &", " const &"),
    (" *", " const *"),
];

/// Moves a leading `const` behind the type it qualifies.
///
/// ```
/// use sigtidy::pipeline::apply_east_const_one;
///
/// assert_eq!(apply_east_const_one("const Foo * const &"), "Foo const * const &");
/// assert_eq!(apply_east_const_one("Foo const"), "Foo const");
/// ```
pub fn apply_east_const_one(type_name: &str) -> String {
    if type_name.ends_with("const") && !type_name.starts_with("const ") {
        return type_name.to_string();
    }

    for (suffix, east) in CONST_SUFFIX_PATTERNS {
        if let Some(inner) = strip_surrounding(type_name, "const ", suffix) {
            return format!("{inner}{east}");
        }
    }

    if let Some(inner) = type_name.strip_prefix("const * ") {
        return format!("{inner} const *");
    }

    if let Some(inner) = type_name.strip_prefix("const ") {
        return format!("{inner} const");
    }

    type_name.to_string()
}

/// Applies [`apply_east_const_one`] to each top-level type of a comma-separated list.
pub fn apply_east_const_typelist(type_names: &str) -> String {
    let brackets = BracketSpec::template();
    split_top_level(type_names, brackets.open, brackets.close, brackets.separator)
        .iter()
        .map(|type_name| apply_east_const_one(type_name))
        .collect::<Vec<_>>()
        .join(", ")
}

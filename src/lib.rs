// Export modules for library usage
pub mod common;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod tree;

// Re-export commonly used types
pub use crate::config::{global_rules, init_global_rules, RuleSet};
pub use crate::errors::{Error, MalformedReason, Result, ResultExt};

pub use crate::pipeline::{
    apply_east_const_one, apply_east_const_typelist, clean_one, clean_several, clean_typestring,
    format_full, format_whitespace, indent_type_tree, lambda_signature, normalize, render_final,
    split_types,
};

pub use crate::tree::{
    depth, filter, parse, parse_sequence, serialize, transform_leaves, BracketSpec, RenderOptions,
    SignatureNode, TraversalOrder,
};

/// Cleans and, when deep enough, indents a (list of) signature(s) with the
/// process-wide rule set.
pub fn clean(type_names: &str) -> Result<String> {
    clean_typestring(type_names, global_rules())
}

/// Readable `lambda: (PARAMS) -> RET` form of a call-operator signature, using the
/// process-wide rule set.
pub fn clean_lambda(member_fn_signature: &str) -> Result<String> {
    lambda_signature(member_fn_signature, global_rules(), true)
}

//! Depth-gated multi-line rendering.

use crate::config::RuleSet;
use crate::errors::Result;
use crate::tree::{depth, parse_sequence, serialize_children, BracketSpec, RenderOptions, SignatureNode};

/// Renders a (list of) signature(s) as an indented tree, one argument per line.
///
/// ```
/// use sigtidy::pipeline::indent_type_tree;
///
/// let tree = indent_type_tree("std::map<int, char>").unwrap();
/// assert_eq!(tree, "std::map<\n    int,\n    char\n>");
/// ```
pub fn indent_type_tree(type_names: &str) -> Result<String> {
    let list = parse_sequence(type_names, BracketSpec::template(), true)?;
    Ok(render_indented(&list))
}

/// Returns `cleaned` unchanged unless its nesting exceeds `rules.indent_depth_limit`,
/// in which case the indented rendering is returned instead.
///
/// Depth is measured on the list wrapped in its synthetic root, so a plain `int`
/// has depth 1 and `A<B<int>>` has depth 3. Indentation kicks in once that depth is
/// greater than `limit + 1`. A limit of 0 never indents.
pub fn render_final(cleaned: &str, rules: &RuleSet) -> Result<String> {
    let limit = rules.indent_depth_limit;
    if limit == 0 {
        return Ok(cleaned.to_string());
    }

    let list = parse_sequence(cleaned, BracketSpec::template(), true)?;
    let list_depth = depth(&list);
    if list_depth > limit + 1 {
        tracing::trace!(depth = list_depth, limit, "indenting deep signature");
        Ok(render_indented(&list))
    } else {
        Ok(cleaned.to_string())
    }
}

fn render_indented(list: &SignatureNode) -> String {
    serialize_children(&list.children, BracketSpec::template(), &RenderOptions::indented(), 0)
}

//! Signature normalization pipeline.
//!
//! Every entry point takes the [`RuleSet`] explicitly. The passes run in a fixed
//! order:
//!
//! 1. literal suppression (namespace noise, `class `/`struct `, custom entries)
//! 2. parse into a [`SignatureNode`](crate::tree::SignatureNode) tree
//! 3. trim every fragment, children first
//! 4. prune undesirable nodes (default allocators, char traits, comparators)
//! 5. compact serialization
//! 6. replacement map, in key order
//! 7. whitespace and punctuation canonicalization
//! 8. east-const rewrite, when enabled
//!
//! Lists of signatures are parsed as the children of a synthetic root, so commas
//! between list items are scoped exactly like commas between template arguments.

mod east_const;
mod format;
mod indent;
mod lambda;
mod passes;

pub use east_const::{apply_east_const_one, apply_east_const_typelist};
pub use format::format_whitespace;
pub use indent::{indent_type_tree, render_final};
pub use lambda::lambda_signature;
pub use passes::{
    drop_undesirable_nodes, perform_replacements, perform_suppressions, remove_literal_noise,
    trim_fragments,
};

use tracing::{debug_span, trace};

use crate::common::text::split_top_level;
use crate::config::RuleSet;
use crate::errors::Result;
use crate::tree::{parse, parse_sequence, serialize, serialize_children, BracketSpec, RenderOptions, SignatureNode};

/// Cleans a single signature (passes 1 to 7).
///
/// A comma outside of any bracket is rejected; use [`clean_several`] for lists.
pub fn clean_one(type_name: &str, rules: &RuleSet) -> Result<String> {
    let _span = debug_span!("clean_one").entered();

    let brackets = BracketSpec::template();
    let noiseless = remove_literal_noise(type_name, rules);
    trace!(input = type_name, output = %noiseless, "suppressed literal noise");
    let tree = parse(&noiseless, brackets, true)?;
    let tree = prune(tree, rules);
    let compact = serialize(&tree, brackets, &RenderOptions::compact());
    Ok(finish_text(&compact, rules))
}

/// Cleans a comma-separated list of signatures (passes 1 to 7).
pub fn clean_several(type_names: &str, rules: &RuleSet) -> Result<String> {
    let _span = debug_span!("clean_several").entered();

    let brackets = BracketSpec::template();
    let noiseless = remove_literal_noise(type_names, rules);
    trace!(input = type_names, output = %noiseless, "suppressed literal noise");
    let list = parse_sequence(&noiseless, brackets, true)?;
    let list = prune(list, rules);
    trace!(items = list.children.len(), "cleaning signature list");
    let compact = serialize_children(&list.children, brackets, &RenderOptions::compact(), 0);
    Ok(finish_text(&compact, rules))
}

/// Full cleanup of a (list of) signature(s), including the optional east-const pass.
///
/// ```
/// use sigtidy::config::RuleSet;
/// use sigtidy::pipeline::normalize;
///
/// let raw = "std::__1::vector<int, std::__1::allocator<int> >";
/// assert_eq!(normalize(raw, &RuleSet::default()).unwrap(), "std::vector<int>");
/// ```
pub fn normalize(raw_signatures: &str, rules: &RuleSet) -> Result<String> {
    let _span = debug_span!("normalize", len = raw_signatures.len()).entered();

    let cleaned = clean_several(raw_signatures, rules)?;
    if rules.force_east_const {
        Ok(apply_east_const_typelist(&cleaned))
    } else {
        Ok(cleaned)
    }
}

/// [`normalize`], then indent when the result nests deeper than the configured limit.
pub fn clean_typestring(type_names: &str, rules: &RuleSet) -> Result<String> {
    let _span = debug_span!("clean_typestring").entered();
    let normalized = normalize(type_names, rules)?;
    render_final(&normalized, rules)
}

/// Canonical spacing only, no suppression or pruning. East-const still applies when enabled.
pub fn format_full(raw_signatures: &str, rules: &RuleSet) -> String {
    let formatted = format_whitespace(raw_signatures);
    if rules.force_east_const {
        apply_east_const_typelist(&formatted)
    } else {
        formatted
    }
}

/// Splits a list of signatures on top-level commas, trimming each item.
///
/// ```
/// use sigtidy::pipeline::split_types;
///
/// assert_eq!(split_types("std::map<int, char>, double"), vec!["std::map<int, char>", "double"]);
/// ```
pub fn split_types(type_names: &str) -> Vec<String> {
    let brackets = BracketSpec::template();
    split_top_level(type_names, brackets.open, brackets.close, brackets.separator)
}

fn prune(mut tree: SignatureNode, rules: &RuleSet) -> SignatureNode {
    trim_fragments(&mut tree);
    drop_undesirable_nodes(tree, rules)
}

fn finish_text(compact: &str, rules: &RuleSet) -> String {
    let replaced = perform_replacements(compact, &rules.replacements_after_undesirable_node_extractions);
    trace!(input = compact, output = %replaced, "applied replacements");
    let formatted = format_whitespace(&replaced);
    trace!(output = %formatted, "canonicalized whitespace");
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_clean_one_basic_string() {
        let raw = "std::__1::basic_string<char, std::__1::char_traits<char>, std::__1::allocator<char> >";
        assert_eq!(clean_one(raw, &RuleSet::default()).unwrap(), "std::string");
    }

    #[test]
    fn test_clean_one_rejects_lists() {
        let err = clean_one("int, double", &RuleSet::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedSignature { .. }));
    }

    #[test]
    fn test_clean_several_keeps_items_apart() {
        let rules = RuleSet::default();
        assert_eq!(clean_several("int, double", &rules).unwrap(), "int, double");
        assert_eq!(
            clean_several("class Foo<int,int>,struct Bar", &rules).unwrap(),
            "Foo<int, int>, Bar"
        );
    }

    #[test]
    fn test_normalize_east_const() {
        let rules = RuleSet::default().with_force_east_const(true);
        assert_eq!(normalize("const Foo *", &rules).unwrap(), "Foo const *");
        assert_eq!(normalize("const int&, const char*", &rules).unwrap(), "int const &, char const *");
    }

    #[test]
    fn test_normalize_without_rules_only_reformats() {
        assert_eq!(
            normalize("class std::__1::vector<int>", &RuleSet::empty()).unwrap(),
            "class std::__1::vector<int>"
        );
    }

    #[test]
    fn test_clean_typestring_indents_deep_signatures() {
        let rules = RuleSet::default().with_indent_depth_limit(2);
        let out = clean_typestring("A<B<C<int>>>", &rules).unwrap();
        assert_eq!(out, "A<\n    B<\n        C<\n            int\n        >\n    >\n>");
    }

    #[test]
    fn test_format_full_keeps_noise() {
        let rules = RuleSet::default();
        assert_eq!(
            format_full("std::__1::vector<int,std::__1::allocator<int> >", &rules),
            "std::__1::vector<int, std::__1::allocator<int>>"
        );
        let east = rules.with_force_east_const(true);
        assert_eq!(format_full("const  int*", &east), "int const *");
    }

    #[test]
    fn test_split_types_empty() {
        assert_eq!(split_types(""), vec![String::new()]);
    }
}

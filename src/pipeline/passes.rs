//! Individual literal and tree passes of the cleanup pipeline.

use std::collections::BTreeMap;

use crate::common::text::{replace_tokens, trim_char};
use crate::config::RuleSet;
use crate::tree::{filter, transform_leaves, SignatureNode, TraversalOrder};

/// Deletes every occurrence of each entry of `suppressions`, in list order.
pub fn perform_suppressions(signature: &str, suppressions: &[String]) -> String {
    suppressions
        .iter()
        .fold(signature.to_string(), |acc, noise| replace_tokens(noise, "", &acc))
}

/// Namespace noise first, then class/struct keywords, then custom entries.
pub fn remove_literal_noise(signature: &str, rules: &RuleSet) -> String {
    let without_namespaces = perform_suppressions(signature, &rules.suppress_extra_namespaces);
    let without_keywords = perform_suppressions(&without_namespaces, &rules.suppress_struct_class);
    perform_suppressions(&without_keywords, &rules.suppress_custom)
}

/// Strips surrounding spaces from every `left` and `right`, children first.
pub fn trim_fragments(tree: &mut SignatureNode) {
    transform_leaves(
        &mut |node: &mut SignatureNode| {
            node.left = trim_char(' ', &node.left);
            node.right = trim_char(' ', &node.right);
        },
        tree,
        TraversalOrder::DepthFirstPostOrder,
    );
}

/// Prunes every node whose trimmed name is listed in `rules.undesirable_type_nodes`.
pub fn drop_undesirable_nodes(tree: SignatureNode, rules: &RuleSet) -> SignatureNode {
    filter(|node| !rules.is_undesirable(node.left.trim_matches(' ')), tree)
}

/// Applies each substitution in map order.
pub fn perform_replacements(signature: &str, replacements: &BTreeMap<String, String>) -> String {
    replacements
        .iter()
        .fold(signature.to_string(), |acc, (from, to)| replace_tokens(from, to, &acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{parse, serialize, BracketSpec, RenderOptions};

    #[test]
    fn test_suppression_order_namespaces_then_keywords() {
        let rules = RuleSet::default();
        assert_eq!(
            remove_literal_noise("class std::__1::vector<struct Foo> __ptr64", &rules),
            "std::vector<Foo>"
        );
    }

    #[test]
    fn test_suppressions_with_empty_rules_are_noop() {
        let input = "class std::__1::vector<int>";
        assert_eq!(remove_literal_noise(input, &RuleSet::empty()), input);
    }

    #[test]
    fn test_trim_fragments() {
        let mut tree = parse("a < b ,  c > const ", BracketSpec::template(), false).unwrap();
        trim_fragments(&mut tree);
        assert_eq!(tree.left, "a");
        assert_eq!(tree.right, "const");
        assert_eq!(tree.children[0].left, "b");
        assert_eq!(tree.children[1].left, "c");
    }

    #[test]
    fn test_drop_undesirable_nodes() {
        let tree = parse(
            "std::vector<int, std::allocator<int>>",
            BracketSpec::template(),
            true,
        )
        .unwrap();
        let cleaned = drop_undesirable_nodes(tree, &RuleSet::default());
        assert_eq!(
            serialize(&cleaned, BracketSpec::template(), &RenderOptions::compact()),
            "std::vector<int>"
        );
    }

    #[test]
    fn test_replacements_in_key_order() {
        let replacements = BTreeMap::from([
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string()),
        ]);
        assert_eq!(perform_replacements("a", &replacements), "c");
    }
}

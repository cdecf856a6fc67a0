//! Structural view of bracket-delimited signatures.
//!
//! A signature such as `std::vector<int> const &` becomes a rooted, ordered tree
//! of [`SignatureNode`]s:
//!
//! - `left` holds the text before the node's bracket group (`std::vector`)
//! - `right` holds the text after the closing bracket (`const &`)
//! - `children` are the bracketed arguments, in source order (`int`)
//!
//! Nodes own their children outright; passes take trees by value or by exclusive
//! reference, never share them.
//!
//! Submodules:
//! - [`parser`]: text to tree
//! - [`algebra`]: depth, filtering and in-place transforms
//! - [`render`]: tree to text, compact or indented

pub mod algebra;
pub mod parser;
pub mod render;

pub use algebra::{depth, filter, transform_leaves, TraversalOrder};
pub use parser::{parse, parse_sequence};
pub use render::{serialize, serialize_children, IndentMode, RenderOptions, SiblingSpacing};

/// One unit of a parsed signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureNode {
    pub left: String,
    pub right: String,
    pub children: Vec<SignatureNode>,
}

impl SignatureNode {
    pub fn new(left: impl Into<String>, right: impl Into<String>, children: Vec<SignatureNode>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            children,
        }
    }

    /// A childless node holding a type atom such as `int`.
    pub fn leaf(left: impl Into<String>) -> Self {
        Self::new(left, String::new(), Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The three structural characters recognised by the parser and emitted by the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSpec {
    pub open: char,
    pub close: char,
    pub separator: char,
}

impl BracketSpec {
    pub const fn new(open: char, close: char, separator: char) -> Self {
        Self {
            open,
            close,
            separator,
        }
    }

    /// `<`, `>` and `,`: template argument lists.
    pub const fn template() -> Self {
        Self::new('<', '>', ',')
    }
}

impl Default for BracketSpec {
    fn default() -> Self {
        Self::template()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_children() {
        let node = SignatureNode::leaf("int");
        assert!(node.is_leaf());
        assert_eq!(node.left, "int");
        assert!(node.right.is_empty());
    }

    #[test]
    fn test_default_brackets_are_template_brackets() {
        let spec = BracketSpec::default();
        assert_eq!((spec.open, spec.close, spec.separator), ('<', '>', ','));
    }
}

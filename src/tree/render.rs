//! Re-serialization of [`SignatureNode`] trees.
//!
//! The same tree renders either on one line (`std::map<int, char> const &`) or as an
//! indented block with one argument per line, depending on [`RenderOptions`].

use super::{BracketSpec, SignatureNode};

/// Where line breaks go around a node's bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    None,
    /// Break and indent before the open bracket.
    NewlineBeforeOpen,
    /// Break after the open bracket so each child starts its own line.
    NewlineBeforeChild,
}

/// What follows a sibling separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingSpacing {
    None,
    Space,
    Newline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent_mode: IndentMode,
    pub sibling_spacing: SiblingSpacing,
    pub space_after_left: bool,
    pub space_before_right: bool,
    pub indent_unit: String,
}

impl RenderOptions {
    /// Single line, `", "` between siblings, a space before trailing qualifiers.
    pub fn compact() -> Self {
        Self {
            indent_mode: IndentMode::None,
            sibling_spacing: SiblingSpacing::Space,
            space_after_left: false,
            space_before_right: true,
            indent_unit: String::new(),
        }
    }

    /// One child per line, four spaces per nesting level.
    pub fn indented() -> Self {
        Self {
            indent_mode: IndentMode::NewlineBeforeChild,
            sibling_spacing: SiblingSpacing::Newline,
            space_after_left: false,
            space_before_right: true,
            indent_unit: "    ".to_string(),
        }
    }

    fn sibling_separator(&self, brackets: BracketSpec) -> String {
        let mut separator = brackets.separator.to_string();
        match self.sibling_spacing {
            SiblingSpacing::None => {}
            SiblingSpacing::Space => separator.push(' '),
            SiblingSpacing::Newline => separator.push('\n'),
        }
        separator
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::compact()
    }
}

/// Renders `tree` at nesting level 0.
pub fn serialize(tree: &SignatureNode, brackets: BracketSpec, options: &RenderOptions) -> String {
    let mut out = String::new();
    render_node(tree, brackets, options, 0, &mut out);
    out
}

/// Renders `children` as a sibling list, each child at `level`.
///
/// Used for sequences parsed with [`super::parse_sequence`], whose synthetic root
/// has no text of its own.
pub fn serialize_children(
    children: &[SignatureNode],
    brackets: BracketSpec,
    options: &RenderOptions,
    level: usize,
) -> String {
    let mut out = String::new();
    render_children(children, brackets, options, level, &mut out);
    out
}

fn render_children(
    children: &[SignatureNode],
    brackets: BracketSpec,
    options: &RenderOptions,
    level: usize,
    out: &mut String,
) {
    let separator = options.sibling_separator(brackets);
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            out.push_str(&separator);
        }
        render_node(child, brackets, options, level, out);
    }
}

fn render_node(node: &SignatureNode, brackets: BracketSpec, options: &RenderOptions, level: usize, out: &mut String) {
    let line_start = options.indent_unit.repeat(level);
    let indenting = options.indent_mode != IndentMode::None;

    if indenting {
        out.push_str(&line_start);
    }

    out.push_str(&node.left);
    if !node.left.is_empty() && options.space_after_left {
        out.push(' ');
    }

    if !node.children.is_empty() {
        if options.indent_mode == IndentMode::NewlineBeforeOpen {
            out.push('\n');
            out.push_str(&line_start);
        }
        out.push(brackets.open);
        if indenting {
            out.push('\n');
        }

        render_children(&node.children, brackets, options, level + 1, out);

        if indenting {
            out.push('\n');
            out.push_str(&line_start);
        }
        out.push(brackets.close);
    }

    if !node.right.is_empty() && options.space_before_right {
        out.push(' ');
    }
    out.push_str(&node.right);
}

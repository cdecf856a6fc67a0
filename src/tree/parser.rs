//! Single-pass parser from signature text to [`SignatureNode`] trees.
//!
//! The scan keeps an explicit stack of owned nodes: the last entry is the node
//! currently receiving text, the entries below it are its ancestors. Opening a
//! bracket pushes a fresh child; a separator finishes the current node and starts
//! its sibling; a close bracket finishes the current node and resumes its parent,
//! whose further text is treated as trailing qualifiers (`right`).
//!
//! Separators are therefore only "live" one level below an open bracket: a comma
//! nested deeper is consumed while a deeper node is current. Because the stack
//! depth is the bracket depth, this agrees with [`crate::common::text::split_top_level`]
//! on every balanced input.

use super::{BracketSpec, SignatureNode};
use crate::errors::{Error, MalformedReason, Result};

/// Parses one signature.
///
/// `drop_separator_leading_space` discards whitespace that directly follows a
/// structural character, so `"a< b, c >"` and `"a<b,c>"` yield the same tree.
///
/// An empty string parses to a single empty leaf. A separator outside of any
/// bracket, a stray close bracket or an unclosed bracket is reported as
/// [`Error::MalformedSignature`].
pub fn parse(signature: &str, brackets: BracketSpec, drop_separator_leading_space: bool) -> Result<SignatureNode> {
    let root = SignatureNode::default();
    Scan::new(signature, brackets, drop_separator_leading_space, vec![root]).run()
}

/// Parses a separator-joined list of signatures.
///
/// The items become the children of a synthetic root with empty `left`/`right`,
/// exactly as if the whole list had been wrapped in one outer bracket pair. This
/// scopes top-level separators with the same depth tracking as nested ones.
pub fn parse_sequence(signatures: &str, brackets: BracketSpec, drop_separator_leading_space: bool) -> Result<SignatureNode> {
    let stack = vec![SignatureNode::default(), SignatureNode::default()];
    Scan::new(signatures, brackets, drop_separator_leading_space, stack).run()
}

struct Scan<'a> {
    signature: &'a str,
    brackets: BracketSpec,
    drop_leading_space: bool,
    /// Root first, current node last.
    stack: Vec<SignatureNode>,
    /// Stack length at which no real bracket is open.
    floor: usize,
    filling_right: bool,
    after_structural: bool,
}

impl<'a> Scan<'a> {
    fn new(signature: &'a str, brackets: BracketSpec, drop_leading_space: bool, stack: Vec<SignatureNode>) -> Self {
        let floor = stack.len();
        Self {
            signature,
            brackets,
            drop_leading_space,
            stack,
            floor,
            filling_right: false,
            after_structural: false,
        }
    }

    fn run(mut self) -> Result<SignatureNode> {
        for (position, c) in self.signature.char_indices() {
            if c.is_whitespace() && self.drop_leading_space && self.after_structural {
                continue;
            }

            if c == self.brackets.open {
                self.open_child();
            } else if c == self.brackets.separator {
                self.start_sibling(position)?;
            } else if c == self.brackets.close {
                self.close_child(position)?;
            } else {
                self.push_text(c);
            }
        }
        self.finish()
    }

    fn open_child(&mut self) {
        self.stack.push(SignatureNode::default());
        self.filling_right = false;
        self.after_structural = true;
    }

    fn start_sibling(&mut self, position: usize) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(self.error(position, MalformedReason::SeparatorOutsideBrackets));
        }
        self.attach_current();
        self.stack.push(SignatureNode::default());
        self.filling_right = false;
        self.after_structural = true;
        Ok(())
    }

    fn close_child(&mut self, position: usize) -> Result<()> {
        if self.stack.len() <= self.floor {
            return Err(self.error(position, MalformedReason::UnexpectedClose));
        }
        self.attach_current();
        self.filling_right = true;
        self.after_structural = true;
        Ok(())
    }

    fn push_text(&mut self, c: char) {
        if let Some(current) = self.stack.last_mut() {
            if self.filling_right {
                current.right.push(c);
            } else {
                current.left.push(c);
            }
        }
        self.after_structural = false;
    }

    /// Pops the current node into its parent's children. Callers guarantee a parent.
    fn attach_current(&mut self) {
        debug_assert!(self.stack.len() >= 2);
        if let Some(node) = self.stack.pop() {
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(node);
            }
        }
    }

    fn finish(mut self) -> Result<SignatureNode> {
        if self.stack.len() > self.floor {
            let depth = self.stack.len() - self.floor;
            return Err(self.error(self.signature.len(), MalformedReason::Unterminated { depth }));
        }
        while self.stack.len() > 1 {
            self.attach_current();
        }
        Ok(self.stack.pop().unwrap_or_default())
    }

    fn error(&self, position: usize, reason: MalformedReason) -> Error {
        Error::malformed(self.signature, position, reason)
    }
}

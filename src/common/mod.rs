//! Common utilities shared across the sigtidy codebase.
//!
//! Key components:
//! - **Text utilities**: token replacement, spacing fixes around punctuation and
//!   bracket-aware splitting used by the parser and every normalization pass

pub mod text;

pub use text::{replace_tokens, split_top_level, trim_char};

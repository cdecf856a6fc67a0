//! Error types for signature parsing and rule-set loading.
//!
//! Only two stages of the engine can fail:
//!
//! - **Parsing**: a signature whose brackets do not balance produces
//!   [`Error::MalformedSignature`]; a callable signature that does not have the
//!   expected `...(owner)(params)` shape produces [`Error::MalformedLambda`].
//! - **Configuration**: a rule-set document that is not valid JSON/TOML, misses one of
//!   the required keys or carries a value of the wrong type produces
//!   [`Error::ConfigParse`]. Unreadable files surface as [`Error::Io`].
//!
//! Every pass that runs after a successful parse is total, so nothing downstream of
//! the parser returns an error.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a signature could not be turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A close bracket with no matching open bracket.
    UnexpectedClose,
    /// A sibling separator that does not sit inside any bracket pair.
    SeparatorOutsideBrackets,
    /// Input ended while `depth` brackets were still open.
    Unterminated { depth: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedClose => f.write_str("close bracket without a matching open bracket"),
            Self::SeparatorOutsideBrackets => f.write_str("separator outside of any bracket"),
            Self::Unterminated { depth } => write!(f, "{depth} bracket(s) left open"),
        }
    }
}

/// Main error type for sigtidy operations
#[derive(Debug, Error)]
pub enum Error {
    /// Structurally unbalanced signature
    #[error("Malformed signature at byte {position}: {reason} in `{signature}`")]
    MalformedSignature {
        signature: String,
        position: usize,
        reason: MalformedReason,
    },

    /// Callable signature without the expected parenthesised groups
    #[error("Malformed lambda signature: {reason} in `{signature}`")]
    MalformedLambda { signature: String, reason: String },

    /// Rule-set document errors
    #[error("Configuration error: {message}")]
    ConfigParse {
        message: String,
        path: Option<PathBuf>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-signature error at a byte offset
    pub fn malformed(signature: impl Into<String>, position: usize, reason: MalformedReason) -> Self {
        Self::MalformedSignature {
            signature: signature.into(),
            position,
            reason,
        }
    }

    /// Create a malformed-lambda error
    pub fn malformed_lambda(signature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLambda {
            signature: signature.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error without file context
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error for a specific file
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// True for parse failures on signature text (as opposed to configuration issues).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedSignature { .. } | Self::MalformedLambda { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

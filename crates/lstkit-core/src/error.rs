//! Error types shared by the tree crates.
//!
//! Misuse that indicates a bug in the caller (a duplicate id in a padded
//! list, a visitor returning the wrong node kind) panics instead. The
//! variants here cover operations that have a checked form.

use thiserror::Error;

/// Errors raised by checked tree operations.
#[derive(Debug, Error)]
pub enum LstError {
    /// The node kind does not support the requested operation.
    #[error("{node} does not support {operation}")]
    UnsupportedOperation {
        node: &'static str,
        operation: &'static str,
    },

    /// A tree of one kind was found where another was required.
    #[error("expected {expected}, found {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    /// Encoding or decoding a tree failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LstError {
    pub fn unsupported(node: &'static str, operation: &'static str) -> Self {
        LstError::UnsupportedOperation { node, operation }
    }
}

pub type LstResult<T> = Result<T, LstError>;

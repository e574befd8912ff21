//! Extraction Errors
//!
//! Every failure here is a contract violation in the input tree or in a
//! collaborator, never a transient condition, so nothing is retried.

use crate::parse_util::{describe_span, ParseSourceSpan};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A child node is none of Literal, ExpressionContainer, Element or Text.
    #[error("Unexpected child type: {kind}{}", describe_span(.span))]
    UnexpectedNodeKind {
        kind: String,
        span: Option<ParseSourceSpan>,
    },

    #[error("Element <{tag}> has sanitized attributes but no identifier{}", describe_span(.span))]
    MissingIdentifier {
        tag: String,
        span: Option<ParseSourceSpan>,
    },

    #[error("Element <{tag}> appears more than once in one message with unsafe attributes and no identifier{}", describe_span(.span))]
    DuplicateElementName {
        tag: String,
        span: Option<ParseSourceSpan>,
    },

    #[error("Attribute `{name}` has no literal value")]
    NonLiteralAttribute { name: String },

    #[error("Cannot name expression of type {kind}{}", describe_span(.span))]
    UnsupportedExpression {
        kind: String,
        span: Option<ParseSourceSpan>,
    },

    #[error("Invalid syntax tree: {reason}")]
    InvalidTree { reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractionError {
    pub fn invalid_tree(reason: impl Into<String>) -> Self {
        ExtractionError::InvalidTree {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

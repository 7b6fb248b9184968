//! Errors which can occur while turning text into a [TreeNode](crate::TreeNode).
//!
//! Normalization never fails, so there are only two kinds of failure: the normalized text may not
//! be a valid expression ([ParseError]), or it may be valid but contain something which cannot be
//! represented in a binary tree ([ConvertError]). Both are collapsed into [ExpressionError] by the
//! [pipeline](crate::pipeline).

use thiserror::Error;

use crate::node::{generic::Operator, lexer::Token};

/// The normalized text is not a syntactically valid expression.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyInput,

    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: Token, position: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("parenthesis opened at position {position} is never closed")]
    UnclosedParenthesis { position: usize },

    #[error("number '{text}' is out of range")]
    NumberOutOfRange { text: String },

    #[error("expression is nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },

    #[error("expression would make a tree more than {limit} nodes tall")]
    TreeTooTall { limit: usize },
}

/// The parsed expression contains a node which has no binary tree representation.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ConvertError {
    #[error("unsupported node type: {kind}")]
    UnsupportedNode { kind: &'static str },

    #[error("operator '{operator}' has {operands} operand(s), expected 2")]
    OperatorArity { operator: Operator, operands: usize },

    #[error("node '{value}' breaks the binary tree invariant")]
    BrokenInvariant { value: String },
}

/// Any failure of the normalize-parse-convert pipeline.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ExpressionError {
    #[error("invalid expression: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid expression: {0}")]
    Convert(#[from] ConvertError),
}

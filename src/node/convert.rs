//! Defines and implements the [Convertible] trait, for converting a generic node graph into a
//! binary [TreeNode].

use crate::error::ConvertError;

use super::{generic::GenericNode, tree::TreeNode};

/// Implemented by types which can be _converted_ into a binary [TreeNode].
pub trait Convertible {
    /// Attempts to convert this node into a [TreeNode], marking every produced node with
    /// `sub_expression`.
    ///
    /// Failures occur when the node can't be represented in a binary tree; for example `-3` is a
    /// valid expression, but its operator only has one operand. In cases like this, a
    /// [ConvertError] is returned instead.
    fn convert(&self, sub_expression: bool) -> Result<TreeNode, ConvertError>;

    /// Converts this node as the root of a tree.
    fn to_tree(&self) -> Result<TreeNode, ConvertError> {
        self.convert(false)
    }
}

impl Convertible for GenericNode {
    fn convert(&self, sub_expression: bool) -> Result<TreeNode, ConvertError> {
        match self {
            GenericNode::Operator { operator, operands } => match &operands[..] {
                [left, right] => Ok(TreeNode::operator(
                    *operator,
                    left.convert(sub_expression)?,
                    right.convert(sub_expression)?,
                    sub_expression,
                )),
                _ => Err(ConvertError::OperatorArity { operator: *operator, operands: operands.len() }),
            },

            GenericNode::Constant(n) => Ok(TreeNode::number(*n, sub_expression)),

            // Groupings don't get a node of their own, they only mark their contents
            GenericNode::Grouping(inner) => inner.convert(true),

            GenericNode::Symbol(_) | GenericNode::FunctionCall { .. }
                => Err(ConvertError::UnsupportedNode { kind: self.kind_name() }),
        }
    }
}

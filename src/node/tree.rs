//! The binary tree handed to renderers.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::error::ConvertError;

use super::generic::Operator;

/// A node in a binary expression tree. Each node is either an operator with exactly two children,
/// or a number with none.
///
/// Trees are built by [converting](crate::node::convert::Convertible) a
/// [GenericNode](crate::node::generic::GenericNode), and are not modified afterwards.
#[derive(PartialEq, Eq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNode {
    /// An operator symbol, or the textual form of a number.
    pub value: String,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<Box<TreeNode>>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<Box<TreeNode>>,

    /// Whether this node came from inside an explicitly parenthesized part of the expression.
    pub is_sub_expression: bool,
}

impl TreeNode {
    /// Creates a leaf node holding a number.
    pub fn number(value: Decimal, is_sub_expression: bool) -> TreeNode {
        TreeNode {
            value: format_number(value),
            left: None,
            right: None,
            is_sub_expression,
        }
    }

    /// Creates an operator node with two children.
    pub fn operator(operator: Operator, left: TreeNode, right: TreeNode, is_sub_expression: bool) -> TreeNode {
        TreeNode {
            value: operator.symbol().to_string(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            is_sub_expression,
        }
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns true if this node's value is a number.
    pub fn is_numeric(&self) -> bool {
        Decimal::from_str(&self.value).is_ok()
    }

    /// The operator this node represents, if any.
    pub fn operator_kind(&self) -> Option<Operator> {
        Operator::from_symbol(&self.value)
    }

    /// The number of nodes on the longest path from this node down to a leaf, including both.
    pub fn depth(&self) -> usize {
        1 + self.children().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// The total number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(|c| c.node_count()).sum::<usize>()
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.left.iter().chain(self.right.iter()).map(|c| &**c)
    }

    /// Checks that every node in the tree is either a number with no children, or an operator
    /// with two.
    pub fn check_invariants(&self) -> Result<(), ConvertError> {
        let valid = match (&self.left, &self.right) {
            (Some(_), Some(_)) => !self.is_numeric(),
            (None, None) => self.is_numeric(),
            _ => false,
        };

        if !valid {
            return Err(ConvertError::BrokenInvariant { value: self.value.clone() })
        }

        self.children().try_for_each(|c| c.check_invariants())
    }

    /// Renders this tree back into infix text, which parses into an equivalent expression.
    ///
    /// Parenthesized parts of the original expression are parenthesized again. Because a
    /// grouping's flag is shared by everything inside it, nested groupings can't be told apart, so
    /// parentheses are also added wherever precedence or associativity demands them.
    pub fn to_infix(&self) -> String {
        self.render_infix(false)
    }

    fn render_infix(&self, inside_group: bool) -> String {
        let (left, right) = match (&self.left, &self.right) {
            (Some(l), Some(r)) => (l, r),
            _ => return self.wrap_if_group_start(self.value.clone(), inside_group),
        };

        let operator = self.operator_kind();
        let left_text = self.render_operand(left, operator, false);
        let right_text = self.render_operand(right, operator, true);

        self.wrap_if_group_start(format!("{} {} {}", left_text, self.value, right_text), inside_group)
    }

    fn render_operand(&self, operand: &TreeNode, parent: Option<Operator>, is_right: bool) -> String {
        let text = operand.render_infix(self.is_sub_expression);

        // Already parenthesized as the start of a group
        if operand.is_sub_expression && !self.is_sub_expression {
            return text
        }

        let needs_parentheses = match (parent, operand.operator_kind()) {
            (Some(parent), Some(child)) if !operand.is_leaf() => {
                child.precedence() < parent.precedence()
                    || (child.precedence() == parent.precedence()
                        && is_right != parent.is_right_associative())
            }
            _ => false,
        };

        if needs_parentheses { format!("({})", text) } else { text }
    }

    fn wrap_if_group_start(&self, text: String, inside_group: bool) -> String {
        if self.is_sub_expression && !inside_group {
            format!("({})", text)
        } else {
            text
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_infix())
    }
}

/// Formats a number for a tree node. Numbers are always written out in full, never in exponent
/// form, with trailing zeros after the decimal point removed.
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}

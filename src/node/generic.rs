//! The generic expression-node graph produced by the [parser](crate::node::parser).
//!
//! This graph is looser than a [TreeNode](crate::TreeNode): operators may have any number of
//! operands, and it can describe things like variables and function calls which the binary tree
//! has no way to represent. It is [converted](crate::node::convert) into a tree afterwards.

use std::fmt;

use rust_decimal::Decimal;

/// An operator which may appear in an [GenericNode::Operator].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// The symbol used for this operator in expression text, and as the value of a tree node.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Attempts to find the operator with the given symbol.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    /// How tightly this operator binds. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// Exponentiation groups to the right (`2^3^2` is `2^(3^2)`); everything else groups to the
    /// left.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Self::Power)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node in the generic expression graph.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum GenericNode {
    /// An operator applied to an ordered list of operands. Binary operators have two operands,
    /// while a sign such as `-3` is an operator with one.
    Operator { operator: Operator, operands: Vec<GenericNode> },

    /// A numeric constant.
    Constant(Decimal),

    /// An explicitly parenthesized sub-expression.
    Grouping(Box<GenericNode>),

    /// A named value, like `x`.
    Symbol(String),

    /// A function applied to arguments, like `sin(x)`.
    FunctionCall { name: String, arguments: Vec<GenericNode> },
}

impl GenericNode {
    /// Creates a binary operator node.
    pub fn binary(operator: Operator, left: GenericNode, right: GenericNode) -> GenericNode {
        GenericNode::Operator { operator, operands: vec![left, right] }
    }

    /// Creates a unary operator node.
    pub fn unary(operator: Operator, operand: GenericNode) -> GenericNode {
        GenericNode::Operator { operator, operands: vec![operand] }
    }

    /// Wraps this node in a `Grouping`.
    pub fn in_grouping(self) -> GenericNode {
        GenericNode::Grouping(Box::new(self))
    }

    /// A name for this kind of node, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GenericNode::Operator { .. } => "OperatorNode",
            GenericNode::Constant(_) => "ConstantNode",
            GenericNode::Grouping(_) => "ParenthesisNode",
            GenericNode::Symbol(_) => "SymbolNode",
            GenericNode::FunctionCall { .. } => "FunctionNode",
        }
    }
}

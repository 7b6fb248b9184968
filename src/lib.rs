//! Turns arithmetic expression text into binary trees suitable for drawing.
//!
//! Text goes through three stages:
//!   - [normalize] unifies bracket styles, inserts implicit multiplications and replaces alternate
//!     minus signs;
//!   - the [parser](node::parser) builds a [generic](node::generic) node graph;
//!   - the graph is [converted](node::convert) into a [TreeNode].
//!
//! [build_tree] runs all three.

pub mod error;
pub mod node;
pub mod normalize;
pub mod pipeline;
pub mod settings;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{ConvertError, ExpressionError, ParseError},
    node::{
        convert::Convertible,
        generic::{GenericNode, Operator},
        parser::{parse, parse_with},
        tree::TreeNode,
    },
    normalize::{normalize, normalize_with},
    pipeline::{build_tree, build_tree_with, ExpressionState},
    settings::Settings,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

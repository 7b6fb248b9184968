//! Node data structures representing mathematical expressions in two formats.
//!
//! The [parser] produces a [generic] node graph, which closely follows what was written and can
//! describe things which don't make sense in a binary tree, like functions. The graph is then
//! [converted](convert::Convertible) into a [tree], which is what renderers consume.

pub mod generic;
pub mod lexer;
pub mod parser;
pub mod tree;
pub mod convert;

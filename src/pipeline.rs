//! The single entry point which takes raw text all the way to a [TreeNode]: normalize, parse,
//! convert.

use crate::{
    error::ExpressionError,
    node::{convert::Convertible, parser, tree::TreeNode},
    normalize::normalize_with,
    settings::Settings,
};

/// Builds a tree from raw expression text using the default [Settings].
pub fn build_tree(input: &str) -> Result<TreeNode, ExpressionError> {
    build_tree_with(input, &Settings::default())
}

/// Builds a tree from raw expression text.
///
/// This is all-or-nothing: if any stage fails, no tree is produced and the error is returned
/// (after being logged).
pub fn build_tree_with(input: &str, settings: &Settings) -> Result<TreeNode, ExpressionError> {
    let result = run_stages(input, settings);
    if let Err(e) = &result {
        log::warn!("rejected expression {:?}: {}", input, e);
    }
    result
}

fn run_stages(input: &str, settings: &Settings) -> Result<TreeNode, ExpressionError> {
    let normalized = normalize_with(input, settings);
    log::debug!("normalized {:?} to {:?}", input, normalized);

    let graph = parser::parse_with(&normalized, settings)?;
    log::debug!("parsed graph: {:?}", graph);

    let tree = graph.to_tree()?;
    log::debug!("converted tree: {}", tree);

    Ok(tree)
}

/// The most recently submitted expression and the tree built from it, owned by whatever is
/// displaying the tree.
///
/// Each submission replaces the tree wholesale. If a submission fails, the tree is cleared rather
/// than left showing a previous expression.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ExpressionState {
    expression: String,
    tree: Option<TreeNode>,
    settings: Settings,
}

impl ExpressionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state which builds trees using the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings, ..Self::default() }
    }

    /// Replaces the current expression, and attempts to build a tree from it.
    pub fn submit(&mut self, input: &str) -> Result<&TreeNode, ExpressionError> {
        self.expression = input.to_string();
        self.tree = None;

        let tree = build_tree_with(input, &self.settings)?;
        Ok(self.tree.insert(tree))
    }

    /// The most recently submitted expression text, whether or not it was valid.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The tree for the current expression, or `None` if nothing valid has been submitted.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Forgets the current expression and tree.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.tree = None;
    }
}

//! Settings which control how text is turned into a tree.

/// Passed by reference through every stage of the [pipeline](crate::pipeline). Use
/// `Settings::default()` unless there is a reason not to.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Settings {
    /// Whether adjacent terms are multiplied. When enabled, normalization inserts a `*` between a
    /// number and an adjacent parenthesis (`2(3)` becomes `2 * (3)`), and the parser multiplies
    /// juxtaposed terms like `(1)(2)`. When disabled, both are syntax errors.
    pub implicit_multiplication: bool,

    /// The deepest nesting of groupings, signs and exponents which will be parsed before giving
    /// up. The parser recurses once per level.
    pub max_depth: usize,

    /// The tallest tree which will be built. A flat chain like `1+1+1` is as tall as it is long,
    /// and conversion recurses once per level, so this is much larger than `max_depth`.
    pub max_height: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            implicit_multiplication: true,
            max_depth: 256,
            max_height: 4096,
        }
    }
}

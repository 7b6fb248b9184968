//! Rewrites user-typed text into a form which the [parser](crate::node::parser) accepts.
//!
//! Normalization is a fixed, ordered sequence of textual substitutions. The order matters: the
//! implicit multiplication rules only look for `(` and `)`, so every other bracket style must have
//! been converted before they run.
//!
//! Normalization never fails. Text which is still not a valid expression afterwards is rejected by
//! the parser instead.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::settings::Settings;

/// A run of digits, then optional whitespace, then an opening parenthesis: `2 (`.
///
/// Only the digits touching the parenthesis need to match, so `2.5(` and `1e3(` are rewritten too.
static NUMBER_BEFORE_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*\(").unwrap());

/// A closing parenthesis, then optional whitespace, then a run of digits: `) 2`.
static PAREN_BEFORE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*([0-9]+)").unwrap());

const EN_DASH: char = '\u{2013}';

/// Normalizes `input` using the default [Settings].
pub fn normalize(input: &str) -> String {
    normalize_with(input, &Settings::default())
}

/// Normalizes `input`, applying these rules in order:
///
///   1. `{` and `[` become `(`
///   2. `}` and `]` become `)`
///   3. `<digits>(` becomes `<digits> * (` (if implicit multiplication is enabled)
///   4. `)<digits>` becomes `) * <digits>` (if implicit multiplication is enabled)
///   5. en-dashes become `-`
pub fn normalize_with(input: &str, settings: &Settings) -> String {
    let mut text = input.replace(['{', '['], "(");
    log::trace!("opening brackets unified: {:?}", text);

    text = text.replace(['}', ']'], ")");
    log::trace!("closing brackets unified: {:?}", text);

    if settings.implicit_multiplication {
        text = NUMBER_BEFORE_PAREN.replace_all(&text, "${1} * (").into_owned();
        log::trace!("multiplication inserted before parentheses: {:?}", text);

        text = PAREN_BEFORE_NUMBER.replace_all(&text, ") * ${1}").into_owned();
        log::trace!("multiplication inserted after parentheses: {:?}", text);
    }

    text = text.replace(EN_DASH, "-");
    log::trace!("en-dashes replaced: {:?}", text);

    text
}

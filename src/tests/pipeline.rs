use pretty_assertions::assert_eq;

use crate::{
    build_tree, build_tree_with, normalize, ConvertError, ExpressionError, ExpressionState,
    ParseError, Settings,
};

use super::util::{evaluate, init_logger};

#[test]
fn test_grouped_operands() {
    init_logger();

    assert_eq!(normalize("(2+3)*(10-5)"), "(2+3)*(10-5)");
    assert_eq!(
        tree!("(2+3)*(10-5)"),
        op!(
            "*",
            op!("+", leaf!("2", sub), leaf!("3", sub), sub),
            op!("-", leaf!("10", sub), leaf!("5", sub), sub),
        )
    );
}

#[test]
fn test_number_before_parentheses() {
    init_logger();

    assert_eq!(normalize("2(3+4)"), "2 * (3+4)");
    assert_eq!(
        tree!("2(3+4)"),
        op!("*", leaf!("2"), op!("+", leaf!("3", sub), leaf!("4", sub), sub))
    );
}

#[test]
fn test_en_dash_subtraction() {
    init_logger();

    assert_eq!(normalize("5 \u{2013} 2"), "5 - 2");
    assert_eq!(tree!("5 \u{2013} 2"), op!("-", leaf!("5"), leaf!("2")));
}

#[test]
fn test_unbalanced() {
    init_logger();

    let result = build_tree("(2+");
    assert_eq!(result, Err(ExpressionError::Parse(ParseError::UnexpectedEnd)));
    assert!(result.unwrap_err().to_string().starts_with("invalid expression"));
}

#[test]
fn test_mixed_brackets() {
    init_logger();

    assert_eq!(normalize("[1+2]*{3+4}"), "(1+2)*(3+4)");
    assert_eq!(
        tree!("[1+2]*{3+4}"),
        op!(
            "*",
            op!("+", leaf!("1", sub), leaf!("2", sub), sub),
            op!("+", leaf!("3", sub), leaf!("4", sub), sub),
        )
    );
}

#[test]
fn test_rejected_expressions() {
    init_logger();

    assert!(matches!(build_tree(""), Err(ExpressionError::Parse(ParseError::EmptyInput))));
    assert!(matches!(build_tree("2 ** 3"), Err(ExpressionError::Parse(_))));
    assert!(matches!(build_tree("3 & 4"), Err(ExpressionError::Parse(_))));
    assert!(matches!(
        build_tree("2y"),
        Err(ExpressionError::Convert(ConvertError::UnsupportedNode { .. }))
    ));
    assert!(matches!(
        build_tree("-5 + 1"),
        Err(ExpressionError::Convert(ConvertError::OperatorArity { .. }))
    ));
}

#[test]
fn test_settings() {
    init_logger();

    assert_eq!(build_tree("(1)(2)").unwrap(), op!("*", leaf!("1", sub), leaf!("2", sub)));
    assert_eq!(build_tree("2(3)").unwrap(), op!("*", leaf!("2"), leaf!("3", sub)));
    assert!(build_tree("(1)2").is_ok());

    // Without implicit multiplication, adjacent terms are never joined
    let settings = Settings { implicit_multiplication: false, ..Settings::default() };
    for input in ["2(3)", "(1)(2)", "(1)2", "2[3+4]"] {
        assert!(
            matches!(build_tree_with(input, &settings), Err(ExpressionError::Parse(_))),
            "{} should be rejected", input
        );
    }
    assert_eq!(
        build_tree_with("2*(3)", &settings).unwrap(),
        op!("*", leaf!("2"), leaf!("3", sub))
    );
}

#[test]
fn test_long_chains() {
    init_logger();

    let sum = build_tree(&vec!["1"; 1000].join("+")).unwrap();
    assert_eq!(sum.node_count(), 1999);
    assert_eq!(evaluate(&sum), Some(dec!(1000)));

    let product = build_tree(&vec!["1"; 1000].join("*")).unwrap();
    assert_eq!(evaluate(&product), Some(dec!(1)));
}

#[test]
fn test_expression_state() {
    init_logger();

    let mut state = ExpressionState::new();
    assert_eq!(state.tree(), None);

    let tree = state.submit("2(3+4)").unwrap().clone();
    assert_eq!(tree, tree!("2 * (3+4)"));
    assert_eq!(state.expression(), "2(3+4)");
    assert_eq!(state.tree(), Some(&tree));

    // Each submission builds a fresh tree
    state.submit("1+1").unwrap();
    assert_eq!(state.tree(), Some(&op!("+", leaf!("1"), leaf!("1"))));

    // A failed submission clears the tree, but remembers what was typed
    assert!(state.submit("(2+").is_err());
    assert_eq!(state.expression(), "(2+");
    assert_eq!(state.tree(), None);

    state.submit("7").unwrap();
    state.clear();
    assert_eq!(state.expression(), "");
    assert_eq!(state.tree(), None);

    let mut limited = ExpressionState::with_settings(Settings { max_depth: 2, ..Settings::default() });
    assert_eq!(limited.settings().max_depth, 2);
    assert!(limited.submit("(((1)))").is_err());
    assert!(limited.submit("1+2+3+4+5").is_ok());
}

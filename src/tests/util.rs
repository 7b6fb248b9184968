macro_rules! leaf {
    ($v:literal, sub) => {
        crate::TreeNode { value: $v.to_string(), left: None, right: None, is_sub_expression: true }
    };
    ($v:literal) => {
        crate::TreeNode { value: $v.to_string(), left: None, right: None, is_sub_expression: false }
    };
}

macro_rules! op {
    ($v:literal, $l:expr, $r:expr, sub) => {
        crate::TreeNode {
            value: $v.to_string(),
            left: Some(Box::new($l)),
            right: Some(Box::new($r)),
            is_sub_expression: true,
        }
    };
    ($v:literal, $l:expr, $r:expr $(,)?) => {
        crate::TreeNode {
            value: $v.to_string(),
            left: Some(Box::new($l)),
            right: Some(Box::new($r)),
            is_sub_expression: false,
        }
    };
}

macro_rules! dec {
    ($l:literal) => { <rust_decimal::Decimal as core::str::FromStr>::from_str(stringify!($l)).unwrap() };
}

macro_rules! constant {
    ($l:literal) => { crate::GenericNode::Constant(dec!($l)) };
}

macro_rules! binary {
    ($o:ident, $l:expr, $r:expr $(,)?) => { crate::GenericNode::binary(crate::Operator::$o, $l, $r) };
}

macro_rules! tree {
    ($e:expr) => { crate::build_tree($e).unwrap() };
}

/// Sends log output to the test harness, so that `RUST_LOG=trace cargo test` shows each stage.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Evaluates a tree of `+ - * /` over whole numbers, so that trees can be compared by value.
/// Returns `None` on division by zero.
pub fn evaluate(node: &crate::TreeNode) -> Option<rust_decimal::Decimal> {
    use core::str::FromStr;

    match (&node.left, &node.right) {
        (Some(l), Some(r)) => {
            let (l, r) = (evaluate(l)?, evaluate(r)?);
            match node.value.as_str() {
                "+" => l.checked_add(r),
                "-" => l.checked_sub(r),
                "*" => l.checked_mul(r),
                "/" => l.checked_div(r),
                other => panic!("cannot evaluate operator {}", other),
            }
        }
        _ => Some(rust_decimal::Decimal::from_str(&node.value).unwrap()),
    }
}

/// Returns a copy of the tree with every sub-expression flag cleared, leaving only its shape.
pub fn shape(node: &crate::TreeNode) -> crate::TreeNode {
    crate::TreeNode {
        value: node.value.clone(),
        left: node.left.as_ref().map(|l| Box::new(shape(l))),
        right: node.right.as_ref().map(|r| Box::new(shape(r))),
        is_sub_expression: false,
    }
}

/// Calls `f` on every node in the tree.
pub fn visit(node: &crate::TreeNode, f: &mut impl FnMut(&crate::TreeNode)) {
    f(node);
    if let Some(l) = &node.left { visit(l, f); }
    if let Some(r) = &node.right { visit(r, f); }
}

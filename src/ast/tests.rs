use pretty_assertions::assert_eq;

use super::ast::{Expr, ExprType, Prototype};

fn sample_function() -> Expr {
    // def scale(x, k) x * (k + 1)
    Expr::function(
        Prototype::new("scale", vec![Expr::variable("x"), Expr::variable("k")]),
        Expr::binary(
            b'*',
            Expr::variable("x"),
            Expr::binary(b'+', Expr::variable("k"), Expr::number(1.0)),
        ),
    )
}

#[test]
fn test_expr_types() {
    assert_eq!(Expr::number(1.0).get_expr_type(), ExprType::Number);
    assert_eq!(Expr::variable("a").get_expr_type(), ExprType::Variable);
    assert_eq!(
        Expr::binary(b'<', Expr::number(1.0), Expr::number(2.0)).get_expr_type(),
        ExprType::BinaryOp
    );
    assert_eq!(Expr::call("f", vec![]).get_expr_type(), ExprType::Call);
    assert_eq!(Expr::prototype("f", vec![]).get_expr_type(), ExprType::Prototype);
    assert_eq!(sample_function().get_expr_type(), ExprType::Function);
}

#[test]
fn test_call_args_keep_order() {
    let call = Expr::call("f", vec![Expr::number(1.0), Expr::variable("b"), Expr::number(3.0)]);
    let children: Vec<String> = call.children().iter().map(|c| c.to_string()).collect();

    assert_eq!(children, vec!["1", "b", "3"]);
}

#[test]
fn test_walk_is_pre_order() {
    let mut kinds = vec![];
    sample_function().walk(&mut |expr| kinds.push(expr.get_expr_type()));

    assert_eq!(
        kinds,
        vec![
            ExprType::Function,
            ExprType::Variable,
            ExprType::Variable,
            ExprType::BinaryOp,
            ExprType::Variable,
            ExprType::BinaryOp,
            ExprType::Variable,
            ExprType::Number,
        ]
    );
}

#[test]
fn test_leaves_have_no_children() {
    assert!(Expr::number(0.5).children().is_empty());
    assert!(Expr::variable("y").children().is_empty());
}

#[test]
fn test_param_names() {
    let prototype = Prototype::new("f", vec![Expr::variable("a"), Expr::variable("b")]);

    assert_eq!(prototype.param_names().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_param_names_rejects_non_variable() {
    let prototype = Prototype::new("f", vec![Expr::variable("a"), Expr::number(2.0)]);
    let error = prototype.param_names().unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedNode");
    assert_eq!(
        error.to_string(),
        "unexpected node: expected Variable, received Number"
    );
}

#[test]
fn test_display() {
    assert_eq!(Expr::number(2.5).to_string(), "2.5");
    assert_eq!(
        Expr::call("foo", vec![Expr::variable("a"), Expr::number(1.0)]).to_string(),
        "foo(a, 1)"
    );
    assert_eq!(
        Expr::prototype("sin", vec![Expr::variable("x")]).to_string(),
        "extern sin(x)"
    );
    assert_eq!(sample_function().to_string(), "def scale(x, k) (x * (k + 1))");
}

#[test]
fn test_clone_is_deep() {
    let original = sample_function();
    let copy = original.clone();

    assert_eq!(original, copy);
}

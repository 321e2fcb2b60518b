use super::*;

#[test]
fn test_get_invoke_token_from_string_template() {
    let span = Span::new(7, 27);
    let call = InvokeCall::new(
        vec![Expression::string_template("pkg:index:listThings", span)],
        Span::new(0, 32),
    );

    let (token, token_span) = get_invoke_token(&call).expect("token extracts");
    assert_eq!(token, "pkg:index:listThings");
    assert_eq!(token_span, span);
}

#[test]
fn test_get_invoke_token_rejects_other_shapes() {
    // No arguments.
    let call = InvokeCall::new(Vec::new(), Span::ZERO);
    assert!(get_invoke_token(&call).is_none());

    // Non-template first argument.
    let call = InvokeCall::new(
        vec![Expression::var("tok", TypeId::STRING, Span::ZERO)],
        Span::ZERO,
    );
    assert!(get_invoke_token(&call).is_none());

    // Non-string literal part.
    let call = InvokeCall::new(
        vec![Expression::Template(TemplateExpr {
            parts: vec![Expression::Literal(LiteralExpr {
                value: LiteralValue::Int(42),
                span: Span::ZERO,
            })],
            span: Span::ZERO,
        })],
        Span::ZERO,
    );
    assert!(get_invoke_token(&call).is_none());
}

#[test]
fn test_apply_canonical_token_rewrites_literal() {
    let mut call = InvokeCall::new(
        vec![Expression::string_template("pkg:Index:getThing", Span::ZERO)],
        Span::ZERO,
    );

    assert!(call.apply_canonical_token("pkg:index:getThing"));
    let (token, _) = get_invoke_token(&call).expect("token extracts");
    assert_eq!(token, "pkg:index:getThing");

    let mut no_literal = InvokeCall::new(Vec::new(), Span::ZERO);
    assert!(!no_literal.apply_canonical_token("pkg:index:getThing"));
}

#[test]
fn test_expression_types() {
    let template = Expression::string_template("x", Span::ZERO);
    assert_eq!(template.ty(), TypeId::STRING);

    let literal = Expression::Literal(LiteralExpr {
        value: LiteralValue::Bool(true),
        span: Span::ZERO,
    });
    assert_eq!(literal.ty(), TypeId::BOOL);

    let var = Expression::var("count", TypeId::INT, Span::ZERO);
    assert_eq!(var.ty(), TypeId::INT);
}

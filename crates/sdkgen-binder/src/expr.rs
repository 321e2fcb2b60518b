//! The minimal call-site expression layer the binder consumes.
//!
//! A fuller AST lives upstream in the program model; binding only needs
//! expressions that carry a span, answer `ty()`, and, for the token
//! position, expose a single-part string-literal template.

use sdkgen_common::Span;
use sdkgen_types::TypeId;

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl LiteralValue {
    pub fn type_id(&self) -> TypeId {
        match self {
            LiteralValue::String(_) => TypeId::STRING,
            LiteralValue::Int(_) => TypeId::INT,
            LiteralValue::Bool(_) => TypeId::BOOL,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

impl LiteralExpr {
    /// Replace this literal's value with a string, used by callers applying
    /// a canonicalized token returned from binding.
    pub fn rewrite_string(&mut self, value: impl Into<String>) {
        self.value = LiteralValue::String(value.into());
    }
}

/// A string template. Token positions must be single-part templates whose
/// only part is a string literal.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateExpr {
    pub parts: Vec<Expression>,
    pub span: Span,
}

/// An object-literal argument. Its structural type is computed when the
/// literal is type-checked upstream; binding only consults the result.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectExpr {
    pub ty: TypeId,
    pub span: Span,
}

/// A reference to a typed binding (resource output, local, config value).
#[derive(Clone, Debug, PartialEq)]
pub struct VarExpr {
    pub name: String,
    pub ty: TypeId,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Template(TemplateExpr),
    Literal(LiteralExpr),
    Object(ObjectExpr),
    Var(VarExpr),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Template(e) => e.span,
            Expression::Literal(e) => e.span,
            Expression::Object(e) => e.span,
            Expression::Var(e) => e.span,
        }
    }

    /// The expression's static type.
    pub fn ty(&self) -> TypeId {
        match self {
            Expression::Template(_) => TypeId::STRING,
            Expression::Literal(e) => e.value.type_id(),
            Expression::Object(e) => e.ty,
            Expression::Var(e) => e.ty,
        }
    }

    /// A single-part string-literal template, the shape token arguments
    /// take.
    pub fn string_template(value: impl Into<String>, span: Span) -> Expression {
        Expression::Template(TemplateExpr {
            parts: vec![Expression::Literal(LiteralExpr {
                value: LiteralValue::String(value.into()),
                span,
            })],
            span,
        })
    }

    pub fn object(ty: TypeId, span: Span) -> Expression {
        Expression::Object(ObjectExpr { ty, span })
    }

    pub fn var(name: impl Into<String>, ty: TypeId, span: Span) -> Expression {
        Expression::Var(VarExpr {
            name: name.into(),
            ty,
            span,
        })
    }
}

/// A call to the `invoke` intrinsic: `invoke(token, args, opts?)`.
#[derive(Clone, Debug, PartialEq)]
pub struct InvokeCall {
    pub args: Vec<Expression>,
    pub span: Span,
}

impl InvokeCall {
    pub fn new(args: Vec<Expression>, span: Span) -> Self {
        InvokeCall { args, span }
    }

    /// Rewrite the token argument's literal to `canonical`. Returns false if
    /// the call has no literal token position to rewrite.
    pub fn apply_canonical_token(&mut self, canonical: &str) -> bool {
        let Some(Expression::Template(template)) = self.args.first_mut() else {
            return false;
        };
        let Some(Expression::Literal(literal)) = template.parts.first_mut() else {
            return false;
        };
        literal.rewrite_string(canonical);
        true
    }
}

/// Extract the invoke token and its range from a call's first argument,
/// without binding. The token position must be a single-part template whose
/// part is a string literal.
pub fn get_invoke_token(call: &InvokeCall) -> Option<(String, Span)> {
    let Some(Expression::Template(template)) = call.args.first() else {
        return None;
    };
    if template.parts.len() != 1 {
        return None;
    }
    let Expression::Literal(literal) = &template.parts[0] else {
        return None;
    };
    let token = literal.value.as_str()?;
    Some((token.to_string(), template.span))
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;

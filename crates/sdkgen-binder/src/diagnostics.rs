//! Diagnostic constructors for binding failures.

use sdkgen_common::{Diagnostic, DiagnosticCode, Span};

pub(crate) fn token_must_be_string_literal(span: Span) -> Diagnostic {
    Diagnostic::error(
        DiagnosticCode::TokenMustBeStringLiteral,
        "invoke token must be a single string literal",
        span,
    )
}

pub(crate) fn unknown_package(name: &str, span: Span) -> Diagnostic {
    Diagnostic::error(
        DiagnosticCode::UnknownPackage,
        format!("unknown package '{name}'"),
        span,
    )
}

pub(crate) fn unknown_function(token: &str, span: Span) -> Diagnostic {
    Diagnostic::error(
        DiagnosticCode::UnknownFunction,
        format!("unknown function '{token}'"),
        span,
    )
}

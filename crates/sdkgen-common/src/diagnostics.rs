//! User-facing diagnostics.
//!
//! Binding failures caused by user input (bad tokens, unknown packages or
//! functions) are reported as `Diagnostic` values and never abort a binding
//! pass; callers collect them and decide how to render or escalate.
//! Programming errors in the generator itself are *not* diagnostics — those
//! surface as hard errors from the component that detected them.

use crate::span::Span;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// The closed set of user-triggerable failure kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    /// The token argument of an invoke was not a single-part string literal.
    TokenMustBeStringLiteral,
    /// A token did not decompose into `package:module:name`.
    TokenMalformed,
    /// The token named a package absent from the loaded-package cache.
    UnknownPackage,
    /// The token named no function in its package, even after
    /// canonicalization.
    UnknownFunction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: DiagnosticCode,
    pub message_text: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            message_text: message.into(),
            span,
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;

//! Token grammar and canonicalization.
//!
//! Schema entities are named by `package:module:name` tokens. Loaded
//! function tables are keyed by the canonical spelling; call sites may carry
//! legacy spellings (`pkg:index/listThings:listThings`, `pkg:Index:...`)
//! that canonicalization folds onto the table key.

use sdkgen_common::{Diagnostic, DiagnosticCode, Span};

/// A decomposed `package:module:name` token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenParts {
    pub package: String,
    pub module: String,
    pub member: String,
}

/// Split a token into its three parts. Each part must be non-empty.
pub fn decompose_token(token: &str, span: Span) -> Result<TokenParts, Diagnostic> {
    let mut parts = token.split(':');
    let (Some(package), Some(module), Some(member), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed(token, span));
    };
    if package.is_empty() || module.is_empty() || member.is_empty() {
        return Err(malformed(token, span));
    }
    Ok(TokenParts {
        package: package.to_string(),
        module: module.to_string(),
        member: member.to_string(),
    })
}

fn malformed(token: &str, span: Span) -> Diagnostic {
    Diagnostic::error(
        DiagnosticCode::TokenMalformed,
        format!("'{token}' is not a valid 'package:module:name' token"),
        span,
    )
}

/// The canonical module name of a token's module part: any `/`-suffix is
/// stripped (`s3/bucket` names the `s3` module) and the result is
/// lowercased.
fn canonical_module(module: &str) -> String {
    let head = module.split('/').next().unwrap_or(module);
    head.to_lowercase()
}

/// The canonical module a token belongs to, or the empty string for tokens
/// that do not decompose.
pub fn token_to_module(token: &str) -> String {
    match token.split(':').nth(1) {
        Some(module) => canonical_module(module),
        None => String::new(),
    }
}

/// Reassemble `token` in canonical form against `package_name`, folding
/// legacy module spellings onto the spelling used by loaded function tables.
/// Returns `None` if the token does not decompose.
pub fn canonicalize_token(token: &str, package_name: &str) -> Option<String> {
    let parts = decompose_token(token, Span::ZERO).ok()?;
    Some(format!(
        "{}:{}:{}",
        package_name,
        canonical_module(&parts.module),
        parts.member
    ))
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;

use super::*;
use sdkgen_common::DiagnosticCode;

#[test]
fn test_decompose_valid_token() {
    let parts = decompose_token("aws:s3/bucket:Bucket", Span::ZERO).expect("valid token");

    assert_eq!(parts.package, "aws");
    assert_eq!(parts.module, "s3/bucket");
    assert_eq!(parts.member, "Bucket");
}

#[test]
fn test_decompose_rejects_wrong_arity() {
    for bad in ["aws", "aws:s3", "aws:s3:bucket:Bucket", ""] {
        let err = decompose_token(bad, Span::new(3, 10)).expect_err("malformed token");
        assert_eq!(err.code, DiagnosticCode::TokenMalformed);
        assert_eq!(err.span, Span::new(3, 10));
    }
}

#[test]
fn test_decompose_rejects_empty_parts() {
    for bad in [":index:thing", "pkg::thing", "pkg:index:"] {
        let err = decompose_token(bad, Span::ZERO).expect_err("malformed token");
        assert_eq!(err.code, DiagnosticCode::TokenMalformed);
    }
}

#[test]
fn test_token_to_module_strips_suffix_and_case() {
    assert_eq!(token_to_module("aws:s3/bucket:Bucket"), "s3");
    assert_eq!(token_to_module("pkg:index:listThings"), "index");
    assert_eq!(token_to_module("pkg:Index:listThings"), "index");
    assert_eq!(token_to_module("garbage"), "");
}

#[test]
fn test_canonicalize_folds_legacy_spellings() {
    assert_eq!(
        canonicalize_token("pkg:index/listThings:listThings", "pkg").as_deref(),
        Some("pkg:index:listThings")
    );
    assert_eq!(
        canonicalize_token("pkg:Index:listThings", "pkg").as_deref(),
        Some("pkg:index:listThings")
    );
    assert_eq!(canonicalize_token("nope", "pkg"), None);
}

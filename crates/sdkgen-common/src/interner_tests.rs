use super::*;

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();

    let a1 = interner.intern("bucket");
    let a2 = interner.intern("bucket");
    let a3 = interner.intern("object");

    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
    assert_eq!(interner.resolve(a1), "bucket");
    assert_eq!(interner.resolve(a3), "object");
}

#[test]
fn test_empty_string_is_none() {
    let mut interner = Interner::new();

    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
    assert_eq!(interner.resolve(Atom::NONE), "");
}

#[test]
fn test_intern_owned_matches_borrowed() {
    let mut interner = Interner::new();

    let a1 = interner.intern("aws:s3/bucket:Bucket");
    let a2 = interner.intern_owned("aws:s3/bucket:Bucket".to_string());

    assert_eq!(a1, a2);
}

#[test]
fn test_resolve_out_of_bounds_is_empty() {
    let interner = Interner::new();

    assert_eq!(interner.resolve(Atom(9999)), "");
    assert!(interner.try_resolve(Atom(9999)).is_none());
}

#[test]
fn test_intern_common_is_idempotent() {
    let mut interner = Interner::new();
    interner.intern_common();
    let len = interner.len();
    interner.intern_common();

    assert_eq!(interner.len(), len);
    assert!(!interner.is_empty());
}

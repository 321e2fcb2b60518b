use super::*;
use crate::registry::TypeRegistry;
use crate::types::TypeId;

#[test]
fn test_identity_and_any() {
    let registry = TypeRegistry::new();

    assert_eq!(
        registry.conversion_from(TypeId::STRING, TypeId::STRING),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(TypeId::ANY, TypeId::STRING),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(TypeId::STRING, TypeId::ANY),
        Conversion::Unsafe
    );
    assert_eq!(
        registry.conversion_from(TypeId::STRING, TypeId::BOOL),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(TypeId::BOOL, TypeId::STRING),
        Conversion::No
    );
}

#[test]
fn test_numeric_widening_and_narrowing() {
    let registry = TypeRegistry::new();

    assert_eq!(
        registry.conversion_from(TypeId::NUMBER, TypeId::INT),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(TypeId::INT, TypeId::NUMBER),
        Conversion::Unsafe
    );
}

#[test]
fn test_lifting_is_asymmetric() {
    let mut registry = TypeRegistry::new();

    let out = registry.output_of(TypeId::STRING);
    let input = registry.input_of(TypeId::STRING);
    let promise = registry.promise_of(TypeId::STRING);

    // Plain values lift into wrapped positions.
    assert_eq!(
        registry.conversion_from(out, TypeId::STRING),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(input, TypeId::STRING),
        Conversion::Safe
    );
    assert_eq!(
        registry.conversion_from(promise, TypeId::STRING),
        Conversion::Safe
    );

    // Wrapped values never convert back to plain.
    assert_eq!(
        registry.conversion_from(TypeId::STRING, out),
        Conversion::No
    );
    assert_eq!(
        registry.conversion_from(TypeId::STRING, input),
        Conversion::No
    );
    assert_eq!(
        registry.conversion_from(TypeId::STRING, promise),
        Conversion::No
    );
}

#[test]
fn test_input_accepts_outputs_and_promises() {
    let mut registry = TypeRegistry::new();

    let input = registry.input_of(TypeId::STRING);
    let out = registry.output_of(TypeId::STRING);
    let promise = registry.promise_of(TypeId::STRING);

    assert_eq!(registry.conversion_from(input, out), Conversion::Safe);
    assert_eq!(registry.conversion_from(input, promise), Conversion::Safe);
}

#[test]
fn test_promise_rejects_output() {
    let mut registry = TypeRegistry::new();

    let out = registry.output_of(TypeId::STRING);
    let promise = registry.promise_of(TypeId::STRING);

    assert_eq!(registry.conversion_from(promise, out), Conversion::No);
    assert_eq!(registry.conversion_from(out, promise), Conversion::Safe);
}

#[test]
fn test_optional_capping() {
    let mut registry = TypeRegistry::new();

    let opt = registry.optional_of(TypeId::STRING);

    assert_eq!(registry.conversion_from(opt, TypeId::STRING), Conversion::Safe);
    assert_eq!(registry.conversion_from(TypeId::STRING, opt), Conversion::Unsafe);

    let opt_int = registry.optional_of(TypeId::INT);
    assert_eq!(registry.conversion_from(TypeId::STRING, opt_int), Conversion::Unsafe);
    assert_eq!(registry.conversion_from(TypeId::BOOL, opt), Conversion::No);
}

#[test]
fn test_collections_convert_elementwise() {
    let mut registry = TypeRegistry::new();

    let strings = registry.array_of(TypeId::STRING);
    let ints = registry.array_of(TypeId::INT);
    let bools = registry.array_of(TypeId::BOOL);

    assert_eq!(registry.conversion_from(strings, ints), Conversion::Safe);
    assert_eq!(registry.conversion_from(bools, strings), Conversion::No);

    let string_map = registry.map_of(TypeId::STRING);
    let int_map = registry.map_of(TypeId::INT);
    assert_eq!(registry.conversion_from(string_map, int_map), Conversion::Safe);
}

#[test]
fn test_object_conversion_is_property_wise() {
    let mut registry = TypeRegistry::new();

    let (id, obj) = registry.declare_object("pkg:index:Args");
    let name = registry.property("name", TypeId::STRING);
    let opt_int = registry.optional_of(TypeId::INT);
    let limit = registry.property("limit", opt_int);
    registry.define_object_properties(id, vec![name, limit]);

    // {name: string} satisfies the required property; `limit` is optional.
    let name_only = registry.shape_of(vec![name]);
    assert_eq!(registry.conversion_from(obj, name_only), Conversion::Safe);

    // Empty literal misses the required `name`.
    let empty = registry.empty_shape();
    assert_eq!(registry.conversion_from(obj, empty), Conversion::No);

    // Extra source properties are ignored.
    let extra = registry.property("extra", TypeId::BOOL);
    let with_extra = registry.shape_of(vec![name, extra]);
    assert_eq!(registry.conversion_from(obj, with_extra), Conversion::Safe);

    // An unsafe property conversion caps the whole object.
    let name_any = registry.property("name", TypeId::ANY);
    let any_name = registry.shape_of(vec![name_any]);
    assert_eq!(registry.conversion_from(obj, any_name), Conversion::Unsafe);
}

#[test]
fn test_union_combining() {
    let mut registry = TypeRegistry::new();

    let union = registry.union_of([TypeId::STRING, TypeId::INT]);

    // Target union accepts through its most permissive member.
    assert_eq!(registry.conversion_from(union, TypeId::INT), Conversion::Safe);
    // A union source must convert member-by-member.
    assert_eq!(registry.conversion_from(TypeId::INT, union), Conversion::No);
    assert_eq!(registry.conversion_from(TypeId::STRING, union), Conversion::Safe);
}

#[test]
fn test_enum_needs_runtime_membership_check() {
    let mut registry = TypeRegistry::new();

    let (_, color) = registry.declare_enum("pkg:index:Color", TypeId::STRING);

    assert_eq!(registry.conversion_from(color, TypeId::STRING), Conversion::Unsafe);
    assert_eq!(registry.conversion_from(TypeId::STRING, color), Conversion::Safe);
    assert_eq!(registry.conversion_from(TypeId::INT, color), Conversion::No);
}

#[test]
fn test_cyclic_object_conversion_terminates() {
    let mut registry = TypeRegistry::new();

    let (a_id, a_ty) = registry.declare_object("pkg:index:LinkedA");
    let (b_id, b_ty) = registry.declare_object("pkg:index:LinkedB");

    let a_opt = registry.optional_of(a_ty);
    let b_opt = registry.optional_of(b_ty);
    let value = registry.property("value", TypeId::STRING);
    let a_next = registry.property("next", a_opt);
    let b_next = registry.property("next", b_opt);
    registry.define_object_properties(a_id, vec![value, a_next]);
    registry.define_object_properties(b_id, vec![value, b_next]);

    // Structurally identical recursive lists convert; the in-progress set
    // breaks the cycle.
    assert_eq!(registry.conversion_from(a_ty, b_ty), Conversion::Safe);
}

#[test]
fn test_nominal_references_convert_by_identity_only() {
    let mut registry = TypeRegistry::new();

    let bucket = registry.resource_type("aws:s3/bucket:Bucket");
    let object = registry.resource_type("aws:s3/object:Object");

    assert_eq!(registry.conversion_from(bucket, bucket), Conversion::Safe);
    assert_eq!(registry.conversion_from(bucket, object), Conversion::No);
}

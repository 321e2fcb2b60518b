use super::*;
use crate::types::{Primitive, TypeKey};

#[test]
fn test_intrinsics_are_pre_registered() {
    let registry = TypeRegistry::new();

    assert_eq!(
        registry.lookup(TypeId::STRING),
        Some(TypeKey::Intrinsic(Primitive::String))
    );
    assert_eq!(
        registry.lookup(TypeId::ANY),
        Some(TypeKey::Intrinsic(Primitive::Any))
    );
    assert!(registry.is_empty());
}

#[test]
fn test_input_wrapper_is_singleton() {
    let mut registry = TypeRegistry::new();

    let a = registry.input_of(TypeId::STRING);
    let b = registry.input_of(TypeId::STRING);
    let c = registry.input_of(TypeId::INT);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_output_wrapper_is_singleton() {
    let mut registry = TypeRegistry::new();

    let elem = registry.array_of(TypeId::STRING);
    let a = registry.output_of(elem);
    let b = registry.output_of(elem);

    assert_eq!(a, b);
}

#[test]
fn test_resource_type_memoized_by_token() {
    let mut registry = TypeRegistry::new();

    let a = registry.resource_type("aws:s3/bucket:Bucket");
    let b = registry.resource_type("aws:s3/bucket:Bucket");
    let c = registry.resource_type("aws:s3/object:Object");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_optional_collapses() {
    let mut registry = TypeRegistry::new();

    let opt = registry.optional_of(TypeId::STRING);
    let opt_opt = registry.optional_of(opt);

    assert_eq!(opt, opt_opt);
}

#[test]
fn test_union_flattens_and_dedups() {
    let mut registry = TypeRegistry::new();

    let inner = registry.union_of([TypeId::STRING, TypeId::INT]);
    let outer = registry.union_of([TypeId::STRING, inner, TypeId::STRING]);
    let expected = registry.union_of([TypeId::INT, TypeId::STRING]);

    assert_eq!(outer, expected);
}

#[test]
fn test_union_is_order_independent() {
    let mut registry = TypeRegistry::new();

    let a = registry.union_of([TypeId::STRING, TypeId::INT, TypeId::BOOL]);
    let b = registry.union_of([TypeId::BOOL, TypeId::STRING, TypeId::INT]);

    assert_eq!(a, b);
}

#[test]
fn test_union_of_single_member_collapses() {
    let mut registry = TypeRegistry::new();

    assert_eq!(registry.union_of([TypeId::STRING]), TypeId::STRING);
}

#[test]
fn test_declare_object_is_idempotent() {
    let mut registry = TypeRegistry::new();

    let (id_a, ty_a) = registry.declare_object("pkg:index:Thing");
    let (id_b, ty_b) = registry.declare_object("pkg:index:Thing");

    assert_eq!(id_a, id_b);
    assert_eq!(ty_a, ty_b);
}

#[test]
fn test_self_referential_object() {
    let mut registry = TypeRegistry::new();

    let (id, ty) = registry.declare_object("pkg:index:TreeNode");
    let children = registry.array_of(ty);
    let name = registry.property("name", TypeId::STRING);
    let children_prop = registry.property("children", children);
    registry.define_object_properties(id, vec![name, children_prop]);

    let props = registry.object_properties(id);
    assert_eq!(props.len(), 2);
    assert_eq!(props[1].ty, children);
    assert_eq!(registry.display(ty), "pkg:index:TreeNode");
}

#[test]
fn test_shape_properties_are_canonicalized() {
    let mut registry = TypeRegistry::new();

    let x = registry.property("x", TypeId::STRING);
    let y = registry.property("y", TypeId::INT);
    let a = registry.shape_of(vec![x, y]);
    let b = registry.shape_of(vec![y, x]);

    assert_eq!(a, b);
}

#[test]
fn test_representative_strips_wrappers() {
    let mut registry = TypeRegistry::new();

    let (_, obj) = registry.declare_object("pkg:index:Thing");
    let arr = registry.array_of(obj);
    let opt = registry.optional_of(arr);
    let out = registry.output_of(opt);
    let input = registry.input_of(out);

    assert_eq!(registry.representative_type(input), Some(obj));
    assert_eq!(registry.representative_type(TypeId::STRING), None);

    let union = registry.union_of([TypeId::STRING, TypeId::INT]);
    assert_eq!(registry.representative_type(union), None);
}

#[test]
fn test_resolved_type_strips_input_layers() {
    let mut registry = TypeRegistry::new();

    let inner = registry.input_of(TypeId::STRING);
    let outer = registry.input_of(inner);

    assert_eq!(registry.resolved_type(outer), TypeId::STRING);
    assert_eq!(registry.resolved_type(TypeId::STRING), TypeId::STRING);
}

#[test]
fn test_input_shape_wraps_every_property() {
    let mut registry = TypeRegistry::new();

    let (id, obj) = registry.declare_object("pkg:index:ListThingsArgs");
    let prefix = registry.property("prefix", TypeId::STRING);
    let limit = registry.property("limit", TypeId::INT);
    registry.define_object_properties(id, vec![prefix, limit]);

    let shape = registry.input_shape_of(obj).expect("object has a shape");
    let props = registry.properties_of(shape).expect("shape has properties");

    let expected_prefix = registry.input_of(TypeId::STRING);
    let expected_limit = registry.input_of(TypeId::INT);
    assert!(props.iter().any(|p| p.ty == expected_prefix));
    assert!(props.iter().any(|p| p.ty == expected_limit));
}

#[test]
fn test_display_renders_nested_wrappers() {
    let mut registry = TypeRegistry::new();

    let arr = registry.array_of(TypeId::STRING);
    let out = registry.output_of(arr);
    assert_eq!(registry.display(out), "Output<List<string>>");

    let x = registry.property("x", TypeId::INT);
    let shape = registry.shape_of(vec![x]);
    assert_eq!(registry.display(shape), "{x: int}");
}

#[test]
fn test_token_of_nominal_types() {
    let mut registry = TypeRegistry::new();

    let (_, obj) = registry.declare_object("pkg:index:Thing");
    let (_, en) = registry.declare_enum("pkg:index:Color", TypeId::STRING);
    let res = registry.resource_type("pkg:index:Widget");

    let obj_token = registry.token_of(obj).expect("object token");
    let enum_token = registry.token_of(en).expect("enum token");
    let res_token = registry.token_of(res).expect("resource token");

    assert_eq!(registry.strings.resolve(obj_token), "pkg:index:Thing");
    assert_eq!(registry.strings.resolve(enum_token), "pkg:index:Color");
    assert_eq!(registry.strings.resolve(res_token), "pkg:index:Widget");
    assert_eq!(registry.token_of(TypeId::STRING), None);
}

#[test]
fn test_token_references_are_memoized() {
    let mut registry = TypeRegistry::new();

    let a = registry.token_type("other:index:External");
    let b = registry.token_type("other:index:External");

    assert_eq!(a, b);
    assert_eq!(registry.representative_type(a), Some(a));
    assert_eq!(registry.display(a), "other:index:External");
}

//! The type universe of the generator.
//!
//! Every type a generator can reason about is an interned `TypeId` handle
//! whose structure is a `TypeKey`. The variant set is closed: adding a
//! wrapper kind forces every dispatch site (the discovery walker, the
//! conversion relation, the formatter) to be updated, which is the point.
//!
//! Two variant families coexist here:
//! - schema types (`Object`, `Enum`, `Resource`, `Token`, collections,
//!   primitives) that mirror the declarative schema, and
//! - generator-introduced wrappers (`Input`, `Output`, `Promise`, `Shape`)
//!   that only exist so emitted bindings can be typed.

use sdkgen_common::Atom;
use serde::Serialize;

/// Interned type handle.
///
/// O(1) equality; identical structure always yields an identical id, so two
/// requests for `Input<X>` share one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const BOOL: TypeId = TypeId(0);
    pub const INT: TypeId = TypeId(1);
    pub const NUMBER: TypeId = TypeId(2);
    pub const STRING: TypeId = TypeId(3);
    pub const ARCHIVE: TypeId = TypeId(4);
    pub const ASSET: TypeId = TypeId(5);
    pub const JSON: TypeId = TypeId(6);
    /// The no-information type; also the `dynamic` placeholder used by
    /// degraded binding results.
    pub const ANY: TypeId = TypeId(7);

    /// First id available for user-defined (composite) types.
    pub const FIRST_USER: u32 = 8;

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// Schema primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum Primitive {
    Bool = 0,
    Int = 1,
    Number = 2,
    String = 3,
    Archive = 4,
    Asset = 5,
    Json = 6,
    Any = 7,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Bool,
        Primitive::Int,
        Primitive::Number,
        Primitive::String,
        Primitive::Archive,
        Primitive::Asset,
        Primitive::Json,
        Primitive::Any,
    ];

    #[inline]
    pub const fn type_id(self) -> TypeId {
        TypeId(self as u32)
    }

    #[inline]
    pub fn from_type_id(id: TypeId) -> Option<Primitive> {
        Self::ALL.get(id.0 as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Archive => "archive",
            Primitive::Asset => "asset",
            Primitive::Json => "json",
            Primitive::Any => "any",
        }
    }
}

/// Index of an interned type list (union members).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeListId(pub u32);

/// Index of a nominal object definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub u32);

/// Index of a nominal enum definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnumId(pub u32);

/// Index of an interned structural shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeId(pub u32);

/// Structure of an interned type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(Primitive),
    Optional(TypeId),
    Array(TypeId),
    /// String-keyed map.
    Map(TypeId),
    Union(TypeListId),
    /// Nominal schema object; may be self-referential through its
    /// properties.
    Object(ObjectId),
    Enum(EnumId),
    /// Reference to a resource, by token.
    Resource(Atom),
    /// Opaque cross-package token reference.
    Token(Atom),
    /// Value usable as a function/resource argument.
    Input(TypeId),
    /// Value produced asynchronously by a resource/function.
    Output(TypeId),
    /// Eventual value of a plain (non-output) invoke.
    Promise(TypeId),
    /// Structural property bag: call-site object literals and synthesized
    /// argument shapes. Not a schema type.
    Shape(ShapeId),
}

/// A named, typed member of an object or shape. Optionality is carried by
/// the property type (`Optional<T>`), not by a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Property {
    pub name: Atom,
    pub ty: TypeId,
}

/// A nominal object definition. Properties are attached after declaration
/// so self-referential objects can be built.
#[derive(Clone, Debug)]
pub struct ObjectDef {
    pub token: Atom,
    pub properties: Vec<Property>,
}

/// A nominal enum definition.
#[derive(Clone, Copy, Debug)]
pub struct EnumDef {
    pub token: Atom,
    /// The underlying value type of the enum's members.
    pub element_type: TypeId,
}

/// A structural property bag, interned by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeDef {
    /// Sorted by property name for canonical identity.
    pub properties: Vec<Property>,
}

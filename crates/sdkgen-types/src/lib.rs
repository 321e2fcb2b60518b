//! Type universe and canonical type registry for the sdkgen SDK generator.
//!
//! This crate provides:
//!
//! - **Interned types**: `TypeId` handles over a closed `TypeKey` variant
//!   set, with O(1) equality and canonical wrapper identity
//! - **`TypeRegistry`**: memoizing factories for input/output/collection
//!   wrappers, nominal object/enum definitions (two-phase, cycle-tolerant),
//!   and structural shapes
//! - **`Conversion`**: the three-valued conversion-safety relation used for
//!   overload selection
//! - **`StaticFunctionSignature`**: the bound call-signature shape

pub mod convert;
pub mod format;
pub mod registry;
pub mod signature;
pub mod types;

pub use convert::Conversion;
pub use registry::TypeRegistry;
pub use signature::{Parameter, StaticFunctionSignature};
pub use types::{
    EnumDef, EnumId, ObjectDef, ObjectId, Primitive, Property, ShapeDef, ShapeId, TypeId,
    TypeKey, TypeListId,
};

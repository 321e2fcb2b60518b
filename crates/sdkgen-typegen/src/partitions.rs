//! Per-module partitions and per-type usage details.
//!
//! A partition is the bucket of everything a template emitter renders into
//! one module: the nominal types assigned there, the enums, and for each
//! representative type the wrapper variants the generated code must define.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use sdkgen_types::TypeId;

/// Which wrapper variants of a representative type the generator must emit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDetails {
    /// An `Optional<Input<T>>` position was rewritten to
    /// `Input<Optional<T>>`; the generator must emit the extra flattening
    /// helper.
    pub needs_optional_input_flatten: bool,
    /// Every distinct `Input<...>` node anchored on this type.
    pub input_variants: Vec<TypeId>,
    /// Every distinct `Output<...>` node anchored on this type.
    pub output_variants: Vec<TypeId>,
}

/// The per-module bucket handed to the emitter. Created on first reference,
/// mutated only by the discovery walker.
#[derive(Debug)]
pub struct ModulePartition {
    pub module: String,
    pub import_path: String,
    /// Nominal types assigned to this module, in first-reference order.
    pub types: IndexSet<TypeId>,
    /// Enum types assigned to this module, in first-reference order.
    pub enums: IndexSet<TypeId>,
    details: FxHashMap<TypeId, TypeDetails>,
}

impl ModulePartition {
    pub fn new(module: String, import_path: String) -> Self {
        ModulePartition {
            module,
            import_path,
            types: IndexSet::new(),
            enums: IndexSet::new(),
            details: FxHashMap::default(),
        }
    }

    /// The usage-details record of a representative type, created on first
    /// use. All detail bookkeeping goes through here.
    pub fn details_for_type(&mut self, representative: TypeId) -> &mut TypeDetails {
        self.details.entry(representative).or_default()
    }

    /// Read-only view of a representative type's details, if any were
    /// recorded.
    pub fn type_details(&self, representative: TypeId) -> Option<&TypeDetails> {
        self.details.get(&representative)
    }
}

//! The type discovery walker.
//!
//! `note` is an idempotent, depth-first registration: starting from any type
//! reference a generator will emit, it records every type and wrapper type
//! transitively required, filing results into the owning module partition.
//! The visited set keys on node identity, so the walk terminates on cyclic
//! object graphs and never processes a node twice.
//!
//! Wrapper types are not 1:1 with schema types. An `Output<Optional<List<T>>>`
//! needs an output node per layer so element access through the optional and
//! the list can be generated, and an output object needs an output node per
//! property for field accessors. The rules in `note_output`/`note_input`
//! make that closure complete.

use crate::partitions::ModulePartition;
use crate::resolver::{ModuleResolver, PackageInfo};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use sdkgen_types::{Property, TypeId, TypeKey, TypeRegistry};
use tracing::trace;

/// One generation run's discovery state: the type registry, the visited set,
/// and the module partitions being accumulated.
///
/// Not safe for concurrent writers; parallel drivers must give each worker
/// its own context (see the crate docs).
pub struct GenContext<'a> {
    types: &'a mut TypeRegistry,
    info: PackageInfo,
    resolver: Box<dyn ModuleResolver>,
    partitions: IndexMap<String, ModulePartition>,
    noted: FxHashSet<TypeId>,
}

impl<'a> GenContext<'a> {
    pub fn new(
        types: &'a mut TypeRegistry,
        info: PackageInfo,
        resolver: Box<dyn ModuleResolver>,
    ) -> Self {
        GenContext {
            types,
            info,
            resolver,
            partitions: IndexMap::new(),
            noted: FxHashSet::default(),
        }
    }

    /// The underlying registry.
    pub fn types(&self) -> &TypeRegistry {
        self.types
    }

    /// Whether `ty` has already been noted.
    pub fn is_noted(&self, ty: TypeId) -> bool {
        self.noted.contains(&ty)
    }

    pub fn partition(&self, module: &str) -> Option<&ModulePartition> {
        self.partitions.get(module)
    }

    /// Partitions in first-reference order.
    pub fn partitions(&self) -> impl Iterator<Item = &ModulePartition> {
        self.partitions.values()
    }

    /// Consume the context, handing the partitions to the emitter.
    pub fn into_partitions(self) -> IndexMap<String, ModulePartition> {
        self.partitions
    }

    /// The partition owning `module`, created and seeded with naming
    /// configuration on first reference.
    pub fn partition_for_module(&mut self, module: &str) -> &mut ModulePartition {
        let import_path = self.info.import_path_for(module);
        self.partitions
            .entry(module.to_string())
            .or_insert_with(|| ModulePartition::new(module.to_string(), import_path))
    }

    /// The partition owning `token`, per the module resolver.
    pub fn partition_for_token(&mut self, token: &str) -> &mut ModulePartition {
        let module = self.resolver.module_for_token(token);
        self.partition_for_module(&module)
    }

    /// Resolve `t`'s representative type and its owning partition, assigning
    /// the representative to the partition. Types with no nominal anchor
    /// (primitives, unions) have no partition.
    pub fn partition_for_type(&mut self, t: TypeId) -> Option<(TypeId, &mut ModulePartition)> {
        let representative = self.types.representative_type(t)?;
        let token = self.types.token_of(representative)?;
        let token = self.types.strings.resolve(token).to_string();
        let partition = self.partition_for_token(&token);
        partition.types.insert(representative);
        Some((representative, partition))
    }

    /// Note a type reference and everything it transitively requires.
    /// Idempotent; cycles terminate through the visited set.
    pub fn note(&mut self, ty: TypeId) {
        if !self.noted.insert(ty) {
            return;
        }
        trace!(ty = ty.0, "noting type");

        let Some(key) = self.types.lookup(ty) else {
            return;
        };
        match key {
            TypeKey::Output(elem) => self.note_output(ty, elem),
            TypeKey::Input(elem) => self.note_input(ty, elem),
            TypeKey::Optional(elem) => self.note_optional(elem),
            TypeKey::Array(elem) | TypeKey::Map(elem) | TypeKey::Promise(elem) => {
                self.note(elem);
            }
            TypeKey::Union(members) => {
                let members = self.types.type_list(members);
                for &member in members.iter() {
                    self.note(member);
                }
            }
            TypeKey::Object(id) => {
                let properties = self.types.object_properties(id).to_vec();
                let _ = self.partition_for_type(ty);
                for property in properties {
                    self.note(property.ty);
                }
            }
            TypeKey::Shape(id) => {
                let Some(def) = self.types.shape_def(id) else {
                    return;
                };
                let properties = def.properties.clone();
                for property in properties {
                    self.note(property.ty);
                }
            }
            TypeKey::Enum(_) => {
                if let Some((representative, partition)) = self.partition_for_type(ty) {
                    partition.enums.insert(representative);
                }
            }
            TypeKey::Resource(_) | TypeKey::Token(_) | TypeKey::Intrinsic(_) => {}
        }
    }

    /// An output type additionally requires outputs for element access
    /// (optionals and collections) or per-property access (objects), then
    /// registers itself with its representative's details.
    fn note_output(&mut self, output_ty: TypeId, elem: TypeId) {
        match self.types.lookup(elem) {
            Some(TypeKey::Optional(e)) | Some(TypeKey::Array(e)) | Some(TypeKey::Map(e)) => {
                let element_output = self.types.output_of(e);
                self.note(element_output);
            }
            Some(TypeKey::Object(id)) => {
                let properties = self.types.object_properties(id).to_vec();
                for property in properties {
                    let property_output = self.types.output_of(property.ty);
                    self.note(property_output);
                }
            }
            _ => {}
        }

        if let Some((representative, partition)) = self.partition_for_type(output_ty) {
            partition
                .details_for_type(representative)
                .output_variants
                .push(output_ty);
        }
    }

    /// An input type requires its element, and an output of the element's
    /// resolved (non-input) shape: a resolved value must still be
    /// representable as an output.
    fn note_input(&mut self, input_ty: TypeId, elem: TypeId) {
        self.note(elem);

        let resolved = self.types.resolved_type(elem);
        let resolved_output = self.types.output_of(resolved);
        self.note(resolved_output);

        if let Some((representative, partition)) = self.partition_for_type(input_ty) {
            partition
                .details_for_type(representative)
                .input_variants
                .push(input_ty);
        }
    }

    /// Optionality is pushed inside input wrappers: `Optional<Input<E>>`
    /// becomes `Input<Optional<E>>`, and E's representative is flagged for
    /// the flattening helper.
    fn note_optional(&mut self, elem: TypeId) {
        if let Some(TypeKey::Input(inner)) = self.types.lookup(elem) {
            let optional_inner = self.types.optional_of(inner);
            let rewritten = self.types.input_of(optional_inner);
            self.note(rewritten);

            if let Some((representative, partition)) = self.partition_for_type(inner) {
                partition
                    .details_for_type(representative)
                    .needs_optional_input_flatten = true;
            }
            return;
        }
        self.note(elem);
    }

    /// Note the output type of every property, without walking the owning
    /// object itself. Used when a generator only needs output-side property
    /// accessors.
    pub fn note_output_properties(&mut self, properties: &[Property]) {
        for property in properties {
            let property_output = self.types.output_of(property.ty);
            self.note(property_output);
        }
    }
}

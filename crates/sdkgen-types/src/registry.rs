//! Type interning and the canonical wrapper-type factories.
//!
//! The registry converts `TypeKey` structures into lightweight `TypeId`
//! handles. Interning is what makes the wrapper factories memoizing: asking
//! for `input_of(E)` twice returns the same node because both requests
//! intern the same key.
//!
//! The registry is single-writer by design. Discovery and binding are
//! synchronous, depth-first passes; callers that want to parallelize must
//! give each worker its own registry (the registry is plain data passed by
//! reference, never ambient global state).

use crate::types::{
    EnumDef, EnumId, ObjectDef, ObjectId, Primitive, Property, ShapeDef, ShapeId, TypeId,
    TypeKey, TypeListId,
};
use rustc_hash::FxHashMap;
use sdkgen_common::{Atom, Interner};
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

const TYPE_LIST_INLINE: usize = 8;

type TypeListBuffer = SmallVec<[TypeId; TYPE_LIST_INLINE]>;

struct SliceInterner<T> {
    items: Vec<Arc<[T]>>,
    map: FxHashMap<Arc<[T]>, u32>,
}

impl<T> SliceInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        let empty: Arc<[T]> = Arc::from(Vec::new());
        let mut map = FxHashMap::default();
        map.insert(empty.clone(), 0);
        SliceInterner {
            items: vec![empty],
            map,
        }
    }

    fn intern(&mut self, items: Vec<T>) -> u32 {
        if items.is_empty() {
            return 0;
        }

        if let Some(&id) = self.map.get(items.as_slice()) {
            return id;
        }

        let arc: Arc<[T]> = items.into();
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<[T]>> {
        self.items.get(id as usize).cloned()
    }

    fn empty(&self) -> Arc<[T]> {
        self.items[0].clone()
    }
}

struct ValueInterner<T> {
    items: Vec<Arc<T>>,
    map: FxHashMap<Arc<T>, u32>,
}

impl<T> ValueInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        ValueInterner {
            items: Vec::new(),
            map: FxHashMap::default(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }

        let arc = Arc::new(value);
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<T>> {
        self.items.get(id as usize).cloned()
    }
}

/// Canonical factory and lookup table for all generator types.
pub struct TypeRegistry {
    /// String interner for tokens and property names.
    pub strings: Interner,
    key_to_id: FxHashMap<TypeKey, TypeId>,
    id_to_key: Vec<TypeKey>,
    type_lists: SliceInterner<TypeId>,
    shapes: ValueInterner<ShapeDef>,
    objects: Vec<ObjectDef>,
    objects_by_token: FxHashMap<Atom, ObjectId>,
    enums: Vec<EnumDef>,
    enums_by_token: FxHashMap<Atom, EnumId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry {
            strings: {
                let mut interner = Interner::new();
                interner.intern_common();
                interner
            },
            key_to_id: FxHashMap::default(),
            id_to_key: Vec::new(),
            type_lists: SliceInterner::new(),
            shapes: ValueInterner::new(),
            objects: Vec::new(),
            objects_by_token: FxHashMap::default(),
            enums: Vec::new(),
            enums_by_token: FxHashMap::default(),
        }
    }

    /// Intern a type key and return its `TypeId`.
    /// If the key already exists, returns the existing id.
    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        if let TypeKey::Intrinsic(kind) = key {
            return kind.type_id();
        }

        if let Some(&id) = self.key_to_id.get(&key) {
            return id;
        }

        let id = TypeId(TypeId::FIRST_USER + self.id_to_key.len() as u32);
        self.id_to_key.push(key);
        self.key_to_id.insert(key, id);
        trace!(id = id.0, ?key, "interned type");
        id
    }

    /// Look up the `TypeKey` for a given `TypeId`.
    pub fn lookup(&self, id: TypeId) -> Option<TypeKey> {
        if id.is_intrinsic() {
            return Primitive::from_type_id(id).map(TypeKey::Intrinsic);
        }
        self.id_to_key
            .get((id.0 - TypeId::FIRST_USER) as usize)
            .copied()
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        TypeId::FIRST_USER as usize + self.id_to_key.len()
    }

    /// Whether only intrinsics are present.
    pub fn is_empty(&self) -> bool {
        self.id_to_key.is_empty()
    }

    // =========================================================================
    // Wrapper factories
    // =========================================================================

    /// The input-wrapped form of `elem`: a value usable as an argument.
    pub fn input_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKey::Input(elem))
    }

    /// The output-wrapped form of `elem`: a value produced asynchronously.
    pub fn output_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKey::Output(elem))
    }

    /// The eventual form of `elem` returned by a plain invoke.
    pub fn promise_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKey::Promise(elem))
    }

    /// Optional of `elem`. Nested optionals collapse.
    pub fn optional_of(&mut self, elem: TypeId) -> TypeId {
        if let Some(TypeKey::Optional(_)) = self.lookup(elem) {
            return elem;
        }
        self.intern(TypeKey::Optional(elem))
    }

    pub fn array_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKey::Array(elem))
    }

    pub fn map_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKey::Map(elem))
    }

    /// Intern a union, flattening nested unions and deduplicating members.
    /// A single surviving member collapses to itself.
    pub fn union_of(&mut self, members: impl IntoIterator<Item = TypeId>) -> TypeId {
        let mut flat: TypeListBuffer = SmallVec::new();
        for member in members {
            if let Some(TypeKey::Union(inner)) = self.lookup(member) {
                let inner = self.type_list(inner);
                flat.extend(inner.iter().copied());
            } else {
                flat.push(member);
            }
        }

        // Sort for canonical identity, independent of member order.
        flat.sort_by_key(|id| id.0);
        flat.dedup();

        match flat.len() {
            0 => TypeId::ANY,
            1 => flat[0],
            _ => {
                let list_id = TypeListId(self.type_lists.intern(flat.into_vec()));
                self.intern(TypeKey::Union(list_id))
            }
        }
    }

    pub fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        self.type_lists.get(id.0).unwrap_or_else(|| self.type_lists.empty())
    }

    // =========================================================================
    // Nominal definitions
    // =========================================================================

    /// Declare a nominal object type by token. Returns the existing
    /// definition on repeat declaration. Properties are attached separately
    /// so self-referential objects can be constructed.
    pub fn declare_object(&mut self, token: &str) -> (ObjectId, TypeId) {
        let token = self.strings.intern(token);
        if let Some(&id) = self.objects_by_token.get(&token) {
            return (id, self.intern(TypeKey::Object(id)));
        }
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(ObjectDef {
            token,
            properties: Vec::new(),
        });
        self.objects_by_token.insert(token, id);
        trace!(object = id.0, "declared object type");
        (id, self.intern(TypeKey::Object(id)))
    }

    pub fn define_object_properties(&mut self, id: ObjectId, properties: Vec<Property>) {
        if let Some(def) = self.objects.get_mut(id.0 as usize) {
            def.properties = properties;
        }
    }

    pub fn object_def(&self, id: ObjectId) -> Option<&ObjectDef> {
        self.objects.get(id.0 as usize)
    }

    pub fn object_properties(&self, id: ObjectId) -> &[Property] {
        self.objects
            .get(id.0 as usize)
            .map(|def| def.properties.as_slice())
            .unwrap_or(&[])
    }

    /// Declare a nominal enum type by token.
    pub fn declare_enum(&mut self, token: &str, element_type: TypeId) -> (EnumId, TypeId) {
        let token = self.strings.intern(token);
        if let Some(&id) = self.enums_by_token.get(&token) {
            return (id, self.intern(TypeKey::Enum(id)));
        }
        let id = EnumId(self.enums.len() as u32);
        self.enums.push(EnumDef {
            token,
            element_type,
        });
        self.enums_by_token.insert(token, id);
        trace!(enum_id = id.0, "declared enum type");
        (id, self.intern(TypeKey::Enum(id)))
    }

    pub fn enum_def(&self, id: EnumId) -> Option<EnumDef> {
        self.enums.get(id.0 as usize).copied()
    }

    /// The reference type for a resource, memoized per token.
    pub fn resource_type(&mut self, token: &str) -> TypeId {
        let token = self.strings.intern(token);
        self.intern(TypeKey::Resource(token))
    }

    /// An opaque cross-package token reference.
    pub fn token_type(&mut self, token: &str) -> TypeId {
        let token = self.strings.intern(token);
        self.intern(TypeKey::Token(token))
    }

    // =========================================================================
    // Structural shapes
    // =========================================================================

    /// Intern a structural property bag. Property order does not matter;
    /// shapes are canonicalized by sorting on the property name.
    pub fn shape_of(&mut self, mut properties: Vec<Property>) -> TypeId {
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        let id = ShapeId(self.shapes.intern(ShapeDef { properties }));
        self.intern(TypeKey::Shape(id))
    }

    /// The empty structural object `{}`.
    pub fn empty_shape(&mut self) -> TypeId {
        self.shape_of(Vec::new())
    }

    pub fn shape_def(&self, id: ShapeId) -> Option<Arc<ShapeDef>> {
        self.shapes.get(id.0)
    }

    /// Convenience constructor for a property with an interned name.
    pub fn property(&mut self, name: &str, ty: TypeId) -> Property {
        Property {
            name: self.strings.intern(name),
            ty,
        }
    }

    /// The properties of an object or shape type, if `t` is one.
    pub fn properties_of(&self, t: TypeId) -> Option<Vec<Property>> {
        match self.lookup(t)? {
            TypeKey::Object(id) => Some(self.object_properties(id).to_vec()),
            TypeKey::Shape(id) => self.shape_def(id).map(|def| def.properties.clone()),
            _ => None,
        }
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Strip `Input` layers: the resolved, non-input form of a type.
    pub fn resolved_type(&self, mut t: TypeId) -> TypeId {
        while let Some(TypeKey::Input(elem)) = self.lookup(t) {
            t = elem;
        }
        t
    }

    /// The nominal anchor of a type, used for module assignment: strips
    /// `Output`, `Input`, `Optional`, `Array`, and `Map` wrappers until an
    /// `Object`, `Enum`, `Resource`, or `Token` is reached. Primitives,
    /// unions, shapes, and promises have no representative.
    pub fn representative_type(&self, mut t: TypeId) -> Option<TypeId> {
        loop {
            match self.lookup(t)? {
                TypeKey::Output(elem)
                | TypeKey::Input(elem)
                | TypeKey::Optional(elem)
                | TypeKey::Array(elem)
                | TypeKey::Map(elem) => t = elem,
                TypeKey::Object(_)
                | TypeKey::Enum(_)
                | TypeKey::Resource(_)
                | TypeKey::Token(_) => return Some(t),
                TypeKey::Intrinsic(_)
                | TypeKey::Union(_)
                | TypeKey::Promise(_)
                | TypeKey::Shape(_) => return None,
            }
        }
    }

    /// The schema token of a nominal type.
    pub fn token_of(&self, t: TypeId) -> Option<Atom> {
        match self.lookup(t)? {
            TypeKey::Object(id) => self.object_def(id).map(|def| def.token),
            TypeKey::Enum(id) => self.enum_def(id).map(|def| def.token),
            TypeKey::Resource(token) | TypeKey::Token(token) => Some(token),
            _ => None,
        }
    }

    /// The output-aware argument shape of a function whose inputs are
    /// `object_ty`: the same properties with every type input-wrapped.
    pub fn input_shape_of(&mut self, object_ty: TypeId) -> Option<TypeId> {
        let properties = self.properties_of(object_ty)?;
        let wrapped = properties
            .into_iter()
            .map(|p| Property {
                name: p.name,
                ty: self.input_of(p.ty),
            })
            .collect();
        Some(self.shape_of(wrapped))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

//! The three-valued conversion relation between static types.
//!
//! `conversion_from(target, source)` answers: can a value of `source`'s type
//! be used where `target` is expected, and if so, does the conversion need a
//! runtime check? The relation is total and terminates on cyclic object
//! graphs by assuming in-progress pairs convert (coinductive semantics).
//!
//! The load-bearing asymmetry: plain values lift into `Input`/`Output`
//! positions, but an `Output` never converts back to a plain type — a
//! resolved value cannot be recovered synchronously. Overload selection in
//! the invocation binder is built entirely on that asymmetry.

use crate::registry::TypeRegistry;
use crate::types::{Property, TypeId, TypeKey};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Conversion safety, ordered so that `min` combines conjunctive
/// obligations (all properties must convert) and `max` disjunctive
/// alternatives (any union member may accept).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Conversion {
    /// No conversion exists.
    No,
    /// Conversion exists but may fail at runtime.
    Unsafe,
    /// Conversion always succeeds.
    Safe,
}

impl Conversion {
    #[inline]
    pub fn exists(self) -> bool {
        self != Conversion::No
    }

    #[inline]
    pub fn is_safe(self) -> bool {
        self == Conversion::Safe
    }
}

impl TypeRegistry {
    /// Whether a value of type `source` can be used where `target` is
    /// expected.
    pub fn conversion_from(&self, target: TypeId, source: TypeId) -> Conversion {
        let mut in_progress = FxHashSet::default();
        self.convert(target, source, &mut in_progress)
    }

    fn convert(
        &self,
        target: TypeId,
        source: TypeId,
        in_progress: &mut FxHashSet<(TypeId, TypeId)>,
    ) -> Conversion {
        if target == source || target == TypeId::ANY {
            return Conversion::Safe;
        }
        if source == TypeId::ANY {
            return Conversion::Unsafe;
        }
        if !in_progress.insert((target, source)) {
            // Already checking this pair further up the stack: assume it
            // holds (cycles in object graphs are self-consistent).
            return Conversion::Safe;
        }
        let result = self.convert_uncached(target, source, in_progress);
        in_progress.remove(&(target, source));
        result
    }

    fn convert_uncached(
        &self,
        target: TypeId,
        source: TypeId,
        in_progress: &mut FxHashSet<(TypeId, TypeId)>,
    ) -> Conversion {
        let (Some(target_key), Some(source_key)) = (self.lookup(target), self.lookup(source))
        else {
            return Conversion::No;
        };

        // A union source must convert member-by-member.
        if let TypeKey::Union(members) = source_key {
            let members = self.type_list(members);
            return members
                .iter()
                .map(|&m| self.convert(target, m, in_progress))
                .min()
                .unwrap_or(Conversion::No);
        }

        match target_key {
            // A union target accepts through its most permissive member.
            TypeKey::Union(members) => {
                let members = self.type_list(members);
                members
                    .iter()
                    .map(|&m| self.convert(m, source, in_progress))
                    .max()
                    .unwrap_or(Conversion::No)
            }

            TypeKey::Optional(t) => match source_key {
                TypeKey::Optional(s) => self.convert(t, s, in_progress),
                _ => self.convert(t, source, in_progress),
            },

            TypeKey::Input(t) => match source_key {
                TypeKey::Input(s) | TypeKey::Output(s) | TypeKey::Promise(s) => {
                    self.convert(t, s, in_progress)
                }
                _ => self.convert(t, source, in_progress),
            },

            TypeKey::Output(t) => match source_key {
                TypeKey::Output(s) | TypeKey::Promise(s) | TypeKey::Input(s) => {
                    self.convert(t, s, in_progress)
                }
                _ => self.convert(t, source, in_progress),
            },

            TypeKey::Promise(t) => match source_key {
                TypeKey::Promise(s) => self.convert(t, s, in_progress),
                // An output cannot be downgraded to a promise.
                TypeKey::Output(_) | TypeKey::Input(_) => Conversion::No,
                _ => self.convert(t, source, in_progress),
            },

            _ => self.convert_plain(target, target_key, source, source_key, in_progress),
        }
    }

    /// Conversions into targets that carry no wrapper of their own.
    fn convert_plain(
        &self,
        target: TypeId,
        target_key: TypeKey,
        source: TypeId,
        source_key: TypeKey,
        in_progress: &mut FxHashSet<(TypeId, TypeId)>,
    ) -> Conversion {
        match source_key {
            // The value may be absent at runtime.
            TypeKey::Optional(s) => {
                return self
                    .convert(target, s, in_progress)
                    .min(Conversion::Unsafe);
            }
            // A resolved value cannot be recovered synchronously.
            TypeKey::Output(_) | TypeKey::Promise(_) | TypeKey::Input(_) => {
                return Conversion::No;
            }
            // An enum value converts as its underlying value type.
            TypeKey::Enum(id) => {
                if let Some(def) = self.enum_def(id) {
                    return self.convert(target, def.element_type, in_progress);
                }
                return Conversion::No;
            }
            _ => {}
        }

        match target_key {
            TypeKey::Intrinsic(_) => match (target, source) {
                (TypeId::NUMBER, TypeId::INT) => Conversion::Safe,
                (TypeId::INT, TypeId::NUMBER) => Conversion::Unsafe,
                (TypeId::STRING, TypeId::BOOL | TypeId::INT | TypeId::NUMBER) => Conversion::Safe,
                _ => Conversion::No,
            },

            TypeKey::Array(t) => match source_key {
                TypeKey::Array(s) => self.convert(t, s, in_progress),
                _ => Conversion::No,
            },

            TypeKey::Map(t) => match source_key {
                TypeKey::Map(s) => self.convert(t, s, in_progress),
                _ => Conversion::No,
            },

            TypeKey::Object(_) | TypeKey::Shape(_) => {
                match source_key {
                    TypeKey::Object(_) | TypeKey::Shape(_) => {}
                    _ => return Conversion::No,
                }
                self.convert_properties(target, source, in_progress)
            }

            // Membership in the enum needs a runtime check.
            TypeKey::Enum(id) => {
                let Some(def) = self.enum_def(id) else {
                    return Conversion::No;
                };
                self.convert(def.element_type, source, in_progress)
                    .min(Conversion::Unsafe)
            }

            // Nominal references convert only to themselves, which the
            // identity fast path already handled.
            TypeKey::Resource(_) | TypeKey::Token(_) => Conversion::No,

            TypeKey::Optional(_)
            | TypeKey::Union(_)
            | TypeKey::Input(_)
            | TypeKey::Output(_)
            | TypeKey::Promise(_) => Conversion::No,
        }
    }

    /// Property-wise conversion between object/shape types: every target
    /// property must be satisfied; extra source properties are ignored.
    fn convert_properties(
        &self,
        target: TypeId,
        source: TypeId,
        in_progress: &mut FxHashSet<(TypeId, TypeId)>,
    ) -> Conversion {
        let (Some(target_props), Some(source_props)) =
            (self.properties_of(target), self.properties_of(source))
        else {
            return Conversion::No;
        };

        let mut result = Conversion::Safe;
        for tp in &target_props {
            let conversion = match find_property(&source_props, tp) {
                Some(sp) => self.convert(tp.ty, sp.ty, in_progress),
                // A missing source property is fine iff the target property
                // is optional.
                None => match self.lookup(tp.ty) {
                    Some(TypeKey::Optional(_)) => Conversion::Safe,
                    _ => Conversion::No,
                },
            };
            result = result.min(conversion);
            if result == Conversion::No {
                return Conversion::No;
            }
        }
        result
    }
}

fn find_property<'p>(props: &'p [Property], wanted: &Property) -> Option<&'p Property> {
    props.iter().find(|p| p.name == wanted.name)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

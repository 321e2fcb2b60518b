//! Packages, functions, resources, and the loaded-package cache.
//!
//! Everything here is immutable once loading finishes; the discovery and
//! binding passes only read it.

use rustc_hash::FxHashMap;
use sdkgen_types::{Property, TypeId, TypeRegistry};
use serde::Serialize;
use std::sync::Arc;

/// A schema-defined function.
#[derive(Clone, Debug, Serialize)]
pub struct Function {
    pub token: String,
    /// The nominal argument object type, if the function takes arguments.
    pub inputs: Option<TypeId>,
    /// The output-aware argument shape: `inputs` with every property
    /// input-wrapped. Present whenever `inputs` is.
    pub input_shape: Option<TypeId>,
    /// The nominal result object type, if the function returns anything.
    pub outputs: Option<TypeId>,
    supports_output_version: bool,
}

impl Function {
    /// Build a function definition, deriving its output-aware argument shape
    /// from `inputs`.
    pub fn new(
        token: impl Into<String>,
        inputs: Option<TypeId>,
        outputs: Option<TypeId>,
        types: &mut TypeRegistry,
    ) -> Self {
        let input_shape = inputs.and_then(|t| types.input_shape_of(t));
        Function {
            token: token.into(),
            inputs,
            input_shape,
            outputs,
            supports_output_version: true,
        }
    }

    /// Mark the function as plain-invoke only.
    pub fn without_output_version(mut self) -> Self {
        self.supports_output_version = false;
        self
    }

    /// Whether an output-aware overload may be synthesized for this
    /// function. Requires both an argument and a result object.
    pub fn needs_output_version(&self) -> bool {
        self.supports_output_version
            && self.inputs.is_some()
            && self.input_shape.is_some()
            && self.outputs.is_some()
    }
}

/// A schema-defined resource.
#[derive(Clone, Debug, Serialize)]
pub struct Resource {
    pub token: String,
    pub properties: Vec<Property>,
}

impl Resource {
    /// The reference type other types use to point at this resource,
    /// memoized per token by the registry.
    pub fn reference_type(&self, types: &mut TypeRegistry) -> TypeId {
        types.resource_type(&self.token)
    }
}

/// One loaded schema package: its function and resource tables, keyed by
/// canonical token.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Package {
    pub name: String,
    pub display_name: Option<String>,
    pub version: Option<String>,
    functions: FxHashMap<String, Function>,
    resources: FxHashMap<String, Resource>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            ..Package::default()
        }
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.insert(function.token.clone(), function);
    }

    pub fn function(&self, token: &str) -> Option<&Function> {
        self.functions.get(token)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.token.clone(), resource);
    }

    pub fn resource(&self, token: &str) -> Option<&Resource> {
        self.resources.get(token)
    }
}

/// The loaded-package cache consulted during binding. Populated by an
/// external loader before any binding happens; read-only afterwards.
#[derive(Default)]
pub struct PackageCache {
    entries: FxHashMap<String, Arc<Package>>,
}

impl PackageCache {
    pub fn new() -> Self {
        PackageCache::default()
    }

    pub fn insert(&mut self, package: Package) -> Arc<Package> {
        let package = Arc::new(package);
        self.entries
            .insert(package.name.clone(), package.clone());
        package
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Package>> {
        self.entries.get(name)
    }
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;

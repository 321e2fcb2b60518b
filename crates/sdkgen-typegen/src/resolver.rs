//! Token-to-module resolution and per-module naming configuration.
//!
//! Which module a token's bindings are emitted into is policy, configured
//! externally per package. The discovery walker only sees the
//! [`ModuleResolver`] seam.

use rustc_hash::FxHashMap;
use sdkgen_schema::token_to_module;

/// Pure mapping from a schema token to the module that owns it.
pub trait ModuleResolver {
    fn module_for_token(&self, token: &str) -> String;
}

/// Per-package naming options used to seed module partitions.
#[derive(Clone, Debug, Default)]
pub struct PackageInfo {
    /// Base import path of the generated SDK; module import paths hang off
    /// of it.
    pub import_base_path: String,
    /// Renames applied after the token's module is extracted.
    pub module_to_package: FxHashMap<String, String>,
}

impl PackageInfo {
    /// The import path of a module's partition. The root module lives at the
    /// base path itself.
    pub fn import_path_for(&self, module: &str) -> String {
        if module.is_empty() {
            self.import_base_path.clone()
        } else {
            format!("{}/{}", self.import_base_path, module)
        }
    }
}

/// The stock resolver: canonical module name from the token, an optional
/// rename, and `index` collapsed onto the root module.
#[derive(Clone, Debug, Default)]
pub struct DefaultModuleResolver {
    module_to_package: FxHashMap<String, String>,
}

impl DefaultModuleResolver {
    pub fn new() -> Self {
        DefaultModuleResolver::default()
    }

    pub fn with_mappings(module_to_package: FxHashMap<String, String>) -> Self {
        DefaultModuleResolver { module_to_package }
    }
}

impl ModuleResolver for DefaultModuleResolver {
    fn module_for_token(&self, token: &str) -> String {
        let module = token_to_module(token);
        let module = self
            .module_to_package
            .get(&module)
            .cloned()
            .unwrap_or(module);
        if module == "index" {
            String::new()
        } else {
            module
        }
    }
}

//! Language-neutral type rendering for diagnostics and tests.

use crate::registry::TypeRegistry;
use crate::types::{TypeId, TypeKey};

impl TypeRegistry {
    /// Render a type as `Output<List<string>>`-style text.
    pub fn display(&self, t: TypeId) -> String {
        let Some(key) = self.lookup(t) else {
            return "<unknown>".to_string();
        };
        match key {
            TypeKey::Intrinsic(p) => p.name().to_string(),
            TypeKey::Optional(e) => format!("Optional<{}>", self.display(e)),
            TypeKey::Array(e) => format!("List<{}>", self.display(e)),
            TypeKey::Map(e) => format!("Map<{}>", self.display(e)),
            TypeKey::Input(e) => format!("Input<{}>", self.display(e)),
            TypeKey::Output(e) => format!("Output<{}>", self.display(e)),
            TypeKey::Promise(e) => format!("Promise<{}>", self.display(e)),
            TypeKey::Union(members) => {
                let members = self.type_list(members);
                let rendered: Vec<String> =
                    members.iter().map(|&m| self.display(m)).collect();
                rendered.join(" | ")
            }
            TypeKey::Object(id) => self
                .object_def(id)
                .map(|def| self.strings.resolve(def.token).to_string())
                .unwrap_or_else(|| "<object>".to_string()),
            TypeKey::Enum(id) => self
                .enum_def(id)
                .map(|def| self.strings.resolve(def.token).to_string())
                .unwrap_or_else(|| "<enum>".to_string()),
            TypeKey::Resource(token) | TypeKey::Token(token) => {
                self.strings.resolve(token).to_string()
            }
            TypeKey::Shape(id) => {
                let Some(def) = self.shape_def(id) else {
                    return "{}".to_string();
                };
                let fields: Vec<String> = def
                    .properties
                    .iter()
                    .map(|p| {
                        format!("{}: {}", self.strings.resolve(p.name), self.display(p.ty))
                    })
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }
        }
    }
}

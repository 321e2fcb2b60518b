//! Static function signatures produced by the invocation binder and
//! consumed by downstream type checking and emission.

use crate::types::TypeId;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeId,
}

/// A bound call signature. Invoke signatures always carry exactly three
/// parameters: `token`, `args`, and an optional `provider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticFunctionSignature {
    pub parameters: Vec<Parameter>,
    pub return_type: TypeId,
}

impl StaticFunctionSignature {
    pub fn new(parameters: Vec<Parameter>, return_type: TypeId) -> Self {
        StaticFunctionSignature {
            parameters,
            return_type,
        }
    }

    /// The declared type of the `args` parameter, when present.
    pub fn args_type(&self) -> Option<TypeId> {
        self.parameters
            .iter()
            .find(|p| p.name == "args")
            .map(|p| p.ty)
    }
}

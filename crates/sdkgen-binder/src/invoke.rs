//! Invoke-signature binding.
//!
//! Resolution runs through a fixed sequence: token extraction, token
//! decomposition, package lookup, function lookup (with a canonicalization
//! retry), then signature synthesis. Each user-facing failure short-circuits
//! to the dynamic placeholder signature so downstream type checking can
//! proceed, and the step's diagnostic is attached to the result.
//!
//! The output-aware overload is a fallback only: it is selected iff the
//! regular argument shape rejects the call-site type outright while the
//! output-aware shape accepts it safely.

use crate::diagnostics::{token_must_be_string_literal, unknown_function, unknown_package};
use crate::error::BindError;
use crate::expr::{Expression, InvokeCall, get_invoke_token};
use sdkgen_common::Diagnostic;
use sdkgen_schema::{Function, PackageCache, canonicalize_token, decompose_token};
use sdkgen_types::{Conversion, Parameter, StaticFunctionSignature, TypeId, TypeRegistry};
use tracing::debug;

/// The result of binding one call site.
#[derive(Debug)]
pub struct InvokeBinding {
    pub signature: StaticFunctionSignature,
    /// When the call's token resolved only through canonicalization, the
    /// canonical spelling the caller should write back into the literal
    /// (see [`InvokeCall::apply_canonical_token`]).
    pub canonical_token: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Binds invoke call sites against the loaded-package cache. Stateless
/// across calls; call sites may be bound in any order.
pub struct InvokeBinder<'a> {
    packages: &'a PackageCache,
    types: &'a mut TypeRegistry,
}

impl<'a> InvokeBinder<'a> {
    pub fn new(packages: &'a PackageCache, types: &'a mut TypeRegistry) -> Self {
        InvokeBinder { packages, types }
    }

    /// Bind one `invoke` call site to a static signature.
    ///
    /// User-facing failures produce a placeholder signature plus
    /// diagnostics in the `Ok` value; an `Err` means a bug in the caller or
    /// the generator itself.
    pub fn bind_invoke(&mut self, call: &InvokeCall) -> Result<InvokeBinding, BindError> {
        let Some((token, token_span)) = get_invoke_token(call) else {
            let span = call
                .args
                .first()
                .map(|arg| arg.span())
                .unwrap_or(call.span);
            return Ok(self.degraded(token_must_be_string_literal(span)));
        };

        let parts = match decompose_token(&token, token_span) {
            Ok(parts) => parts,
            Err(diagnostic) => return Ok(self.degraded(diagnostic)),
        };

        let Some(package) = self.packages.get(&parts.package).cloned() else {
            return Ok(self.degraded(unknown_package(&parts.package, token_span)));
        };

        let (function, canonical_token) = match package.function(&token) {
            Some(function) => (function, None),
            None => {
                let canonical = canonicalize_token(&token, &package.name);
                match canonical.as_deref().and_then(|c| package.function(c)) {
                    Some(function) => {
                        debug!(%token, canonical = ?canonical, "canonicalized invoke token");
                        (function, canonical)
                    }
                    None => {
                        return Ok(self.degraded(unknown_function(&token, token_span)));
                    }
                }
            }
        };

        let signature = self.signature_for_args(function, call.args.get(1))?;
        Ok(InvokeBinding {
            signature,
            canonical_token,
            diagnostics: Vec::new(),
        })
    }

    /// The dynamic placeholder signature bound when resolution fails:
    /// `(token: string, args: Optional<any>, provider: Optional<string>) -> any`.
    pub fn zero_signature(&mut self) -> StaticFunctionSignature {
        let args = self.types.optional_of(TypeId::ANY);
        self.make_signature(args, TypeId::ANY)
    }

    /// The plain-invoke signature:
    /// `(token, args, provider) -> Promise<Outputs>`.
    pub fn regular_signature(&mut self, function: &Function) -> StaticFunctionSignature {
        let args = match function.inputs {
            Some(inputs) => inputs,
            None => self.types.empty_shape(),
        };
        let outputs = match function.outputs {
            Some(outputs) => outputs,
            None => self.types.empty_shape(),
        };
        let return_type = self.types.promise_of(outputs);
        self.make_signature(args, return_type)
    }

    /// The output-aware signature:
    /// `(token, input-shaped args, provider) -> Output<Outputs>`.
    /// Requesting it for a function without an output version is a caller
    /// bug.
    pub fn output_version_signature(
        &mut self,
        function: &Function,
    ) -> Result<StaticFunctionSignature, BindError> {
        if !function.needs_output_version() {
            return Err(BindError::ArgumentTypeUnresolvable {
                token: function.token.clone(),
            });
        }
        let (Some(args), Some(outputs)) = (function.input_shape, function.outputs) else {
            return Err(BindError::Internal(format!(
                "function {} advertises an output version without input/output types",
                function.token
            )));
        };
        let return_type = self.types.output_of(outputs);
        Ok(self.make_signature(args, return_type))
    }

    fn signature_for_args(
        &mut self,
        function: &Function,
        args: Option<&Expression>,
    ) -> Result<StaticFunctionSignature, BindError> {
        let mut use_output_version = false;
        if function.needs_output_version() {
            if let Some(args) = args {
                let (Some(regular), Some(output_shape)) = (function.inputs, function.input_shape)
                else {
                    return Err(BindError::Internal(format!(
                        "function {} advertises an output version without input types",
                        function.token
                    )));
                };
                let callsite = args.ty();
                let regular_conversion = self.types.conversion_from(regular, callsite);
                let output_conversion = self.types.conversion_from(output_shape, callsite);
                use_output_version = regular_conversion == Conversion::No
                    && output_conversion == Conversion::Safe;
            }
        }

        if use_output_version {
            self.output_version_signature(function)
        } else {
            Ok(self.regular_signature(function))
        }
    }

    fn make_signature(
        &mut self,
        args_type: TypeId,
        return_type: TypeId,
    ) -> StaticFunctionSignature {
        let provider = self.types.optional_of(TypeId::STRING);
        StaticFunctionSignature::new(
            vec![
                Parameter {
                    name: "token".to_string(),
                    ty: TypeId::STRING,
                },
                Parameter {
                    name: "args".to_string(),
                    ty: args_type,
                },
                Parameter {
                    name: "provider".to_string(),
                    ty: provider,
                },
            ],
            return_type,
        )
    }

    fn degraded(&mut self, diagnostic: Diagnostic) -> InvokeBinding {
        InvokeBinding {
            signature: self.zero_signature(),
            canonical_token: None,
            diagnostics: vec![diagnostic],
        }
    }
}

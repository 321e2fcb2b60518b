//! Call-site invocation binding.
//!
//! This crate resolves textual invoke tokens against the loaded-package
//! cache and synthesizes statically-typed call signatures, selecting between
//! the plain and the output-aware overload of a function by
//! conversion-safety. User mistakes degrade to a dynamic placeholder
//! signature plus diagnostics so a whole binding pass can run to completion;
//! generator bugs surface as [`BindError`] and propagate.

pub mod error;
pub use error::BindError;

pub mod expr;
pub use expr::{
    Expression, InvokeCall, LiteralExpr, LiteralValue, ObjectExpr, TemplateExpr, VarExpr,
    get_invoke_token,
};

mod diagnostics;

pub mod invoke;
pub use invoke::{InvokeBinder, InvokeBinding};

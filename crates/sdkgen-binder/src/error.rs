//! Internal binding errors.
//!
//! These are generator bugs, not user input problems: they propagate as
//! `Err` and must never be folded into the diagnostics stream.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    /// An output-aware signature was requested for a function that does not
    /// declare one.
    #[error("function {token} does not have an output version")]
    ArgumentTypeUnresolvable { token: String },

    /// An unexpected failure while translating schema types into a
    /// signature.
    #[error("internal binding error: {0}")]
    Internal(String),
}

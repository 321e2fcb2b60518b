//! Loaded schema model for the sdkgen SDK generator.
//!
//! A schema is assumed parsed and validated before it reaches this crate;
//! what lives here is the in-memory model the type-discovery and binding
//! passes consult: packages with their function and resource tables, and the
//! token grammar (`package:module:name`) with its canonicalization rule.

pub mod package;
pub use package::{Function, Package, PackageCache, Resource};

pub mod token;
pub use token::{TokenParts, canonicalize_token, decompose_token, token_to_module};

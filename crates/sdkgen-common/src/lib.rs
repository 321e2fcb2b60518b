//! Common types and utilities for the sdkgen SDK generator.
//!
//! This crate provides foundational types used across all sdkgen crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, `DiagnosticCode`)

// String interning for token and property-name deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - the user-facing error taxonomy
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticCode};

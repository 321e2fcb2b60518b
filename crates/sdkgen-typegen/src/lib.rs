//! Module partitioning and wrapper-type discovery.
//!
//! A generator that emits bindings for a schema needs far more types than
//! the schema declares: every input position needs an `Input<T>` node, every
//! asynchronous value an `Output<T>` node, and chained accessors need output
//! nodes for element and property access all the way down. This crate
//! computes that transitive closure once, deduplicated, and files every
//! nominal type into the module partition a template emitter will render it
//! from.
//!
//! The entry point is [`GenContext::note`]: visit every type reference you
//! intend to emit, then hand the partitions to the emitter.

pub mod discover;
pub use discover::GenContext;

pub mod partitions;
pub use partitions::{ModulePartition, TypeDetails};

pub mod resolver;
pub use resolver::{DefaultModuleResolver, ModuleResolver, PackageInfo};

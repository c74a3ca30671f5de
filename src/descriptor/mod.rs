//! Dynamic descriptor resolution.
//!
//! Turns raw descriptor-set bytes into a usable runtime [`MessageDescriptor`]
//! for an arbitrary message type named at startup:
//!
//! 1. [`index`] merges all loaded containers into one [`SchemaIndex`], keyed
//!    by base file name.
//! 2. [`locate`] scans the index for the file schema declaring the requested
//!    type, searching nested definitions recursively.
//! 3. [`link`] computes the dependency-ordered import closure of that file,
//!    dropping imports absent from the index.
//! 4. [`build`] materializes the closure into a descriptor pool and looks the
//!    type up, with a bounded fallback over nested definitions.
//!
//! [`MessageDescriptor`]: prost_reflect::MessageDescriptor

pub mod build;
pub mod index;
pub mod link;
pub mod locate;

pub use build::{resolve, ResolveError};
pub use index::{base_name, SchemaIndex, SchemaLoadError};

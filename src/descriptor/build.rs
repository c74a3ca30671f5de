use prost_reflect::{DescriptorPool, FileDescriptor, MessageDescriptor};
use prost_types::FileDescriptorProto;
use tracing::debug;

use super::index::SchemaIndex;
use super::link;
use super::locate::{self, qualify};

/// Failure to produce a runtime descriptor for a requested type name.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("message type `{0}` not found in any loaded descriptor set")]
    TypeNotFound(String),
    #[error("descriptor set is not self-consistent: {0}")]
    Link(#[from] prost_reflect::DescriptorError),
}

/// Resolve `name` to a fully linked [`MessageDescriptor`].
///
/// Locates the declaring file schema, materializes its import closure into a
/// fresh descriptor pool, and looks the type up: first directly (bare or
/// package-qualified), then by walking the declaring file's nested message
/// tree. The walk is bounded by the declared definitions; when it is
/// exhausted without a match the name is simply not resolvable.
///
/// Each call builds a fresh pool: resolutions of the same name yield
/// structurally equal but distinct descriptors.
pub fn resolve(name: &str, index: &SchemaIndex) -> Result<MessageDescriptor, ResolveError> {
    let declaring = locate::find_declaring_file(name, index)
        .ok_or_else(|| ResolveError::TypeNotFound(name.to_string()))?;
    debug!(
        file = declaring.name(),
        message_type = name,
        "located declaring file schema"
    );

    let closure = link::link_order(declaring, index);
    let mut pool = DescriptorPool::new();
    pool.add_file_descriptor_protos(
        closure
            .iter()
            .map(|schema| retain_linked_imports(schema, index)),
    )?;

    let linked = pool
        .get_file_by_name(declaring.name())
        .ok_or_else(|| ResolveError::TypeNotFound(name.to_string()))?;

    // Direct lookup covers `pkg.Foo` (and nested full paths) as given, plus
    // the bare top-level name qualified with the declaring file's package.
    let qualified = qualify(linked.package_name(), name);
    pool.get_message_by_name(name)
        .or_else(|| pool.get_message_by_name(&qualified))
        .or_else(|| find_nested(&linked, name))
        .ok_or_else(|| ResolveError::TypeNotFound(name.to_string()))
}

/// Bounded search for a nested definition matching `name` anywhere in the
/// declaring file's message tree.
fn find_nested(file: &FileDescriptor, name: &str) -> Option<MessageDescriptor> {
    let mut pending: Vec<MessageDescriptor> = file.messages().collect();
    while let Some(message) = pending.pop() {
        if message.name() == name || message.full_name() == name {
            return Some(message);
        }
        pending.extend(message.child_messages());
    }
    None
}

/// Copy of `schema` whose import list keeps only files present in the index.
///
/// Missing imports were already skipped during linking; they must also be
/// removed from the declared dependency list or pool construction would
/// demand files that were never loaded.
fn retain_linked_imports(schema: &FileDescriptorProto, index: &SchemaIndex) -> FileDescriptorProto {
    let mut proto = schema.clone();
    proto.dependency.retain(|import| index.contains_import(import));
    if proto.dependency.len() != schema.dependency.len() {
        // The retained list is re-indexed, invalidating these offsets.
        proto.public_dependency.clear();
        proto.weak_dependency.clear();
    }
    proto
}

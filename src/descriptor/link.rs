use std::collections::HashSet;

use prost_types::FileDescriptorProto;

use super::index::{base_name, SchemaIndex};

/// Dependency-ordered import closure of `schema`.
///
/// Every file appears after all of its resolvable imports, so the result can
/// be handed to a descriptor pool front to back. Imports whose base name is
/// absent from the index are dropped rather than reported; only what the
/// index knows about gets linked. The visited set is keyed by base file name,
/// so a cyclic import graph terminates instead of recursing unboundedly
/// (descriptor construction will still reject the cycle downstream).
pub fn link_order<'a>(
    schema: &'a FileDescriptorProto,
    index: &'a SchemaIndex,
) -> Vec<&'a FileDescriptorProto> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(schema, index, &mut visited, &mut order);
    order
}

fn visit<'a>(
    schema: &'a FileDescriptorProto,
    index: &'a SchemaIndex,
    visited: &mut HashSet<String>,
    order: &mut Vec<&'a FileDescriptorProto>,
) {
    if !visited.insert(base_name(schema.name()).to_string()) {
        return;
    }
    for import in &schema.dependency {
        if let Some(imported) = index.get(base_name(import)) {
            visit(imported, index, visited, order);
        }
    }
    order.push(schema);
}

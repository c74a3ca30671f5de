use prost_types::{DescriptorProto, FileDescriptorProto};

use super::index::SchemaIndex;

/// Find the file schema declaring `name`.
///
/// Scans indexed files in iteration order and returns the first whose message
/// tree contains a match, so an ambiguous name (declared in several files)
/// resolves to the lexicographically first declaring file. `name` may be the
/// bare message name, the package-qualified name, or the fully qualified path
/// of a nested definition (`pkg.Outer.Inner`).
pub fn find_declaring_file<'a>(name: &str, index: &'a SchemaIndex) -> Option<&'a FileDescriptorProto> {
    index.files().find(|file| {
        file.message_type
            .iter()
            .any(|message| message_matches(message, file.package(), name))
    })
}

/// Whether `message`, or any definition nested under it, matches `target`.
///
/// `scope` is the dotted prefix of the current nesting level (the package for
/// top-level messages). The walk is bounded by the declared message tree.
fn message_matches(message: &DescriptorProto, scope: &str, target: &str) -> bool {
    let qualified = qualify(scope, message.name());
    message.name() == target
        || qualified == target
        || message
            .nested_type
            .iter()
            .any(|nested| message_matches(nested, &qualified, target))
}

/// Join a dotted scope and a name, tolerating an empty package.
pub(crate) fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use prost::Message as _;
use prost_types::{FileDescriptorProto, FileDescriptorSet};

/// Failure to load a descriptor-set container from disk.
#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("cannot read descriptor set {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("descriptor set {} is not a valid FileDescriptorSet: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: prost::DecodeError,
    },
}

/// The base (last path segment) of a proto file name.
///
/// Descriptor sets record file names as declared at compile time, often with
/// directory prefixes (`acme/v1/payment.proto`). Imports are matched against
/// the base name only, mirroring how the containers were produced.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Index of every file schema across all loaded containers, keyed by base
/// file name.
///
/// Iteration order is lexicographic by base name, which makes first-match
/// type lookup deterministic when the same type name occurs in several files.
#[derive(Debug, Default, Clone)]
pub struct SchemaIndex {
    files: BTreeMap<String, FileDescriptorProto>,
}

impl SchemaIndex {
    /// Read and decode each container file, then merge them into one index.
    pub fn load(paths: &[PathBuf]) -> Result<Self, SchemaLoadError> {
        let mut sets = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = std::fs::read(path).map_err(|source| SchemaLoadError::Io {
                path: path.clone(),
                source,
            })?;
            let set = FileDescriptorSet::decode(bytes.as_slice()).map_err(|source| {
                SchemaLoadError::Decode {
                    path: path.clone(),
                    source,
                }
            })?;
            sets.push(set);
        }
        Ok(Self::merge(sets))
    }

    /// Merge decoded containers into one index.
    ///
    /// When two containers declare files with the same base name, the later
    /// entry wins. No conflict is reported; whether silent overwrite is the
    /// right call for multi-container deployments is an open question
    /// upstream, so the behavior is kept and documented rather than changed.
    pub fn merge(sets: impl IntoIterator<Item = FileDescriptorSet>) -> Self {
        let mut files = BTreeMap::new();
        for set in sets {
            for file in set.file {
                files.insert(base_name(file.name()).to_string(), file);
            }
        }
        Self { files }
    }

    /// Look up a file schema by base file name.
    pub fn get(&self, base: &str) -> Option<&FileDescriptorProto> {
        self.files.get(base)
    }

    /// All indexed file schemas, in lexicographic base-name order.
    pub fn files(&self) -> impl Iterator<Item = &FileDescriptorProto> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether an import path (possibly with directory prefixes) resolves to
    /// an indexed file.
    pub fn contains_import(&self, import: &str) -> bool {
        self.files.contains_key(base_name(import))
    }

    /// Convenience for a single container already in memory.
    pub fn from_set(set: FileDescriptorSet) -> Self {
        Self::merge([set])
    }
}

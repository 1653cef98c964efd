//! Loads YAML input documents through the `DocumentStore` port.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::yaml::parse_document;
use crate::domain::{AppError, DuplicateKeys};
use crate::ports::DocumentStore;

/// Load a document whose root must be a mapping. An empty document is an
/// empty mapping.
pub fn load_mapping<D: DocumentStore + ?Sized>(
    store: &D,
    path: &Path,
    duplicate_keys: DuplicateKeys,
) -> Result<Mapping, AppError> {
    let content = store.read_document(path)?;
    let value = parse_document(&content, duplicate_keys).map_err(|e| AppError::ConfigParse {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => {
            debug!(path = %path.display(), keys = mapping.len(), "loaded document");
            Ok(mapping)
        }
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::ConfigParse {
            path: path.display().to_string(),
            details: "YAML root is not a mapping".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryDocumentStore, TestFiles};

    fn store(path: &str, content: &str) -> MemoryDocumentStore {
        let files = TestFiles::new();
        files.add(path, content);
        MemoryDocumentStore::new(files)
    }

    #[test]
    fn loads_mapping_root() {
        let store = store("defaults.yml", "runner: ubuntu-latest\n");
        let mapping =
            load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::Reject).unwrap();

        assert_eq!(mapping.get("runner").unwrap(), &Value::from("ubuntu-latest"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let store = store("other.yml", "");
        let err = load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::Reject)
            .unwrap_err();

        assert!(matches!(err, AppError::ConfigNotFound { ref path } if path == "defaults.yml"));
    }

    #[test]
    fn duplicate_key_is_a_parse_error_naming_the_key() {
        let store = store("defaults.yml", "runner: a\nrunner: b\n");
        let err = load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::Reject)
            .unwrap_err();

        let AppError::ConfigParse { path, details } = err else {
            panic!("expected parse error");
        };
        assert_eq!(path, "defaults.yml");
        assert!(details.contains("duplicate key 'runner'"), "{details}");
    }

    #[test]
    fn duplicate_key_allowed_in_last_wins_mode() {
        let store = store("defaults.yml", "runner: a\nrunner: b\n");
        let mapping =
            load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::LastWins).unwrap();

        assert_eq!(mapping.get("runner").unwrap(), &Value::from("b"));
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let store = store("defaults.yml", "");
        let mapping =
            load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::Reject).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let store = store("defaults.yml", "- a\n- b\n");
        let err = load_mapping(&store, Path::new("defaults.yml"), DuplicateKeys::Reject)
            .unwrap_err();

        assert!(err.to_string().contains("not a mapping"));
    }
}

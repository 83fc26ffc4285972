//! YAML seed-file loading.

use std::path::Path;

use super::value::{Context, Value};
use super::ContextError;

/// Loads and parses a YAML seed-context file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
/// The top-level document must be a mapping; scalar leaves become strings
/// or booleans, nested mappings become tables.
pub(crate) fn load_seed_file(path: &Path, required: bool) -> Result<Option<Context>, ContextError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let doc: serde_yaml::Value =
                serde_yaml::from_str(&contents).map_err(|e| ContextError::ParseError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            match doc {
                // An empty file parses as null; treat it as an empty seed.
                serde_yaml::Value::Null => Ok(Some(Context::new())),
                serde_yaml::Value::Mapping(mapping) => {
                    Ok(Some(convert_mapping(mapping, path)?))
                }
                _ => Err(ContextError::NonMappingSeed(path.to_path_buf())),
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ContextError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ContextError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping, path: &Path) -> Result<Context, ContextError> {
    let mut table = Context::new();
    for (key, value) in mapping {
        let serde_yaml::Value::String(key) = key else {
            return Err(ContextError::NonStringSeedKey(path.to_path_buf()));
        };
        let value = convert_value(value, path, &key)?;
        table.insert(key, value);
    }
    Ok(table)
}

fn convert_value(
    value: serde_yaml::Value,
    path: &Path,
    key: &str,
) -> Result<Value, ContextError> {
    match value {
        serde_yaml::Value::Null => Ok(Value::String(String::new())),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => Ok(Value::String(n.to_string())),
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Mapping(m) => Ok(Value::Table(convert_mapping(m, path)?)),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Tagged(_) => {
            Err(ContextError::UnsupportedSeedValue {
                path: path.to_path_buf(),
                key: key.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_loads_valid_seed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "EXPORT_DIR: /export").unwrap();
        writeln!(file, "galaxy:").unwrap();
        writeln!(file, "  admin_users: admin@example.org").unwrap();
        writeln!(file, "  allow_user_creation: false").unwrap();

        let seed = load_seed_file(file.path(), true).unwrap().unwrap();
        assert_eq!(seed["EXPORT_DIR"].as_str(), Some("/export"));
        let galaxy = seed["galaxy"].as_table().unwrap();
        assert_eq!(galaxy["admin_users"].as_str(), Some("admin@example.org"));
        assert_eq!(galaxy["allow_user_creation"].as_bool(), Some(false));
    }

    #[test]
    fn test_numbers_become_strings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "galaxy:").unwrap();
        writeln!(file, "  database_connection_pool_size: 20").unwrap();

        let seed = load_seed_file(file.path(), true).unwrap().unwrap();
        let galaxy = seed["galaxy"].as_table().unwrap();
        assert_eq!(
            galaxy["database_connection_pool_size"].as_str(),
            Some("20")
        );
    }

    #[test]
    fn test_required_missing() {
        let result = load_seed_file(Path::new("/nonexistent/context.yml"), true);
        assert!(matches!(result, Err(ContextError::FileNotFound(_))));
    }

    #[test]
    fn test_optional_missing() {
        let seed = load_seed_file(Path::new("/nonexistent/context.yml"), false).unwrap();
        assert!(seed.is_none());
    }

    #[test]
    fn test_empty_file_is_empty_seed() {
        let file = NamedTempFile::new().unwrap();
        let seed = load_seed_file(file.path(), true).unwrap().unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_scalar_document_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "just a string").unwrap();

        let result = load_seed_file(file.path(), true);
        assert!(matches!(result, Err(ContextError::NonMappingSeed(_))));
    }

    #[test]
    fn test_sequence_value_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tools:").unwrap();
        writeln!(file, "  - bwa").unwrap();
        writeln!(file, "  - samtools").unwrap();

        let result = load_seed_file(file.path(), true);
        assert!(matches!(
            result,
            Err(ContextError::UnsupportedSeedValue { .. })
        ));
    }
}

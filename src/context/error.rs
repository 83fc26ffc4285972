use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContextError {
    #[error("required seed file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("seed file '{0}' is not a mapping at the top level")]
    NonMappingSeed(PathBuf),

    #[error("seed file '{0}' contains a non-string key")]
    NonStringSeedKey(PathBuf),

    #[error("unsupported value for key '{key}' in seed file '{path}'")]
    UnsupportedSeedValue { path: PathBuf, key: String },
}

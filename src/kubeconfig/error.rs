use std::path::PathBuf;
use thiserror::Error;

pub type KubeconfigResult<T> = Result<T, KubeconfigError>;

#[derive(Debug, Error)]
pub enum KubeconfigError {
    #[error("Unable to determine home directory")]
    MissingHomeDir,
    #[error("Failed to access kubeconfig at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse kubeconfig at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to serialize kubeconfig: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("Field '{0}' is missing from kubeconfig")]
    MissingField(&'static str),
    #[error("Field '{field}' is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

//! CLI errors. Every failure ends the process with `error: <message>`.

use std::path::PathBuf;

use rarible_svm_client::error::ClientError;
use rarible_svm_core::error::CoreError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line value that parsed but makes no sense here
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown {kind} '{name}'")]
    Unknown {
        kind: &'static str,
        name: String,
    },
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        CliError::Client(ClientError::Core(e))
    }
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        CliError::Unknown {
            kind,
            name: name.into(),
        }
    }
}

//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no fixture JSON files found in {0}")]
    NoFixtures(PathBuf),
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("{function}: missing input '{field}'")]
    MissingInput { function: String, field: String },
    #[error("{function}: invalid input '{field}': {reason}")]
    InvalidInput {
        function: String,
        field: String,
        reason: &'static str,
    },
}

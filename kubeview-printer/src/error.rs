use k8s_openapi::serde_json;
use thiserror::Error;

use crate::link::LinkError;

pub type PrintResult<T> = Result<T, PrinterError>;

#[derive(Debug, Error)]
pub enum PrinterError {
    #[error("invalid input object: {0}")]
    InvalidInput(String),

    #[error("unable to print object: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("unable to decode {actual} as {expected}: {source}")]
    Malformed {
        expected: String,
        actual: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("no printer registered for {api_version} {kind}")]
    Unregistered { api_version: String, kind: String },

    #[error("table {table:?}: {detail}")]
    RowShape { table: String, detail: String },

    #[error("invalid arguments: {0}")]
    Args(#[source] serde_json::Error),

    #[error("unable to serialize component: {0}")]
    Serialize(#[source] serde_json::Error),
}

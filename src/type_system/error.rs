//! Defines the error types for function metadata.
use crate::store::FunctionId;
use thiserror::Error;

/// Failures at the registry boundary. The resolvers themselves are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("Function '{0}' has no registered descriptor")]
    UnknownFunction(FunctionId),
    #[error("Function '{0}' is declared more than once in the function table")]
    DuplicateFunction(FunctionId),
    #[error("Unknown measure type '{0}'")]
    UnknownMeasureType(String),
    #[error("Unknown evaluation mode '{0}'")]
    UnknownMode(String),
    #[error("Malformed function table: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MetaError {
    fn from(e: serde_json::Error) -> Self {
        MetaError::Serialization(e.to_string())
    }
}

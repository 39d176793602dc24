//! Error types for normviz

use thiserror::Error;

/// All possible errors in normviz
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormError {
    /// Argument outside the domain of a norm function (negative or NaN order)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Elementwise inputs have different shapes
    #[error("Dimension mismatch between x and y components")]
    DimensionMismatch,

    /// Demo configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed or written
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NormError {
    fn from(e: serde_json::Error) -> Self {
        NormError::Serialization(e.to_string())
    }
}

//! Error types for the Relief pipeline.
//!
//! All crates return `ReliefResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Relief pipeline.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// The source raster could not be sampled.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A setting is outside its valid domain.
    #[error("Invalid setting `{setting}`: {reason}")]
    Config {
        setting: &'static str,
        reason: String,
    },

    /// A pipeline stage hit a numeric failure.
    #[error("Processing failed in stage `{stage}`: {reason}")]
    Processing {
        stage: &'static str,
        reason: String,
    },

    /// Mesh buffers are malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReliefError {
    /// Shorthand for a [`ReliefError::Config`].
    pub fn config(setting: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            setting,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`ReliefError::Processing`].
    pub fn processing(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Processing {
            stage,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for `Result<T, ReliefError>`.
pub type ReliefResult<T> = Result<T, ReliefError>;

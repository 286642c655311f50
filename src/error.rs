//! Error types for puzzle generation

use std::fmt;

/// Errors that can occur during puzzle generation or queries
#[derive(Debug, Clone)]
pub enum ShatterError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Generation failed due to geometry issues
    GenerationFailed(String),
    /// A mesh could not be converted into a collision shape
    InvalidMesh(String),
    /// Requested shard index does not exist
    ShardNotFound(usize),
}

impl fmt::Display for ShatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShatterError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            ShatterError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
            ShatterError::InvalidMesh(msg) => write!(f, "invalid mesh: {}", msg),
            ShatterError::ShardNotFound(ix) => write!(f, "shard not found: {}", ix),
        }
    }
}

impl std::error::Error for ShatterError {}

/// Result type alias for puzzle operations
pub type Result<T> = std::result::Result<T, ShatterError>;

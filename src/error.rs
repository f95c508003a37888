//==============================================================================
// Error types
//==============================================================================

use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Capacity for field '{field}' must be greater than 0")]
    ZeroCapacity { field: &'static str },

    #[error("Literal of {len} bytes plus terminator does not fit a {capacity}-byte buffer")]
    LiteralTooLong { len: usize, capacity: usize },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Literal of {len} bytes plus terminator does not fit a {capacity}-byte buffer")]
    LiteralTooLong { len: usize, capacity: usize },

    #[error("the process-wide buffer is already installed")]
    ProcessBufferInUse,

    #[error("{construct} loop exceeded {limit} iterations")]
    RunawayLoop { construct: &'static str, limit: usize },
}

pub type Result<T> = std::result::Result<T, DemoError>;

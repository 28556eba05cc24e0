//! Error type shared by every module.

use thiserror::Error as ThisError;

/// Errors raised by constructors, improvers, config validation and input parsing.
#[derive(Debug, ThisError)]
pub enum TspError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A constructor was invoked on an instance below its operating floor.
    #[error("at least {required} points are required, found {found}")]
    TooFewPoints { found: usize, required: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

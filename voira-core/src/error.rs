//! Error types for the voira-core library

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;

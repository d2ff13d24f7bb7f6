//! Error types for callpath operations

/// Result type alias for callpath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for callpath operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lookup strategy resolved a key that is absent from the table
    #[error("no target registered under key {key:?}")]
    MissingTarget {
        /// Key that failed to resolve
        key: String,
    },

    /// Repetition counts or operation selection rejected before timing
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fixture generator could not produce the requested strings
    #[error("random fixture generation failed: {0}")]
    RandomGeneration(String),
}

impl Error {
    /// Create a missing-target error for a key
    pub fn missing_target(key: impl Into<String>) -> Self {
        Self::MissingTarget { key: key.into() }
    }

    /// Create an invalid-configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a random-generation error
    pub fn random_generation(message: impl Into<String>) -> Self {
        Self::RandomGeneration(message.into())
    }
}

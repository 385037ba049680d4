//! Unified error types for the engine layer

use karma_domain::DomainError;
use thiserror::Error;

/// Unified error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A second game state was requested from the same registry
    #[error("Singleton violation: game state already created, use the existing instance")]
    SingletonViolation,

    /// Reading console input failed
    #[error("Prompt read failed: {0}")]
    Prompt(String),

    /// A domain operation failed
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl EngineError {
    /// Create a prompt error from any I/O failure description
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }
}

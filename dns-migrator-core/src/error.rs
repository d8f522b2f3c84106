//! Core error type

use serde::Serialize;
use thiserror::Error;

pub use dns_migrator_provider::{CredentialValidationError, ProviderError};

/// Errors surfaced by the core services.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Configuration could not be parsed or is incomplete
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A credential field is missing or malformed
    #[error("{0}")]
    CredentialValidation(#[from] CredentialValidationError),

    /// Requested connector is not supported
    #[error("Unsupported connector: {0}")]
    UnsupportedConnector(String),

    /// Zone log (info / error artifact) could not be written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Failure reported by a source or target provider
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether the failure stems from input or remote state rather than a fault.
    ///
    /// Expected failures are logged at `warn`, everything else at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_)
            | Self::CredentialValidation(_)
            | Self::UnsupportedConnector(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::StorageError(_) => false,
        }
    }
}

/// Result alias for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

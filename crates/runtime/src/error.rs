//! Error types raised by the mod host.

use factory_core::{CatalogError, ErrorSeverity, RegistryError};
use thiserror::Error;

/// Errors surfaced by [`crate::ModHost`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("mods have already been loaded")]
    AlreadyLoaded,

    #[error("mods are not loaded")]
    NotLoaded,

    #[error("mod {mod_name} failed to load: {source}")]
    Registration {
        mod_name: String,
        #[source]
        source: RegistryError,
    },
}

impl CatalogError for HostError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyLoaded | Self::NotLoaded => ErrorSeverity::Validation,
            Self::Registration { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyLoaded => "HOST_ALREADY_LOADED",
            Self::NotLoaded => "HOST_NOT_LOADED",
            Self::Registration { source, .. } => source.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;

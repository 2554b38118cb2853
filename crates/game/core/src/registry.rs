//! Registration contract between content and the host.

use crate::error::{CatalogError, ErrorSeverity, ValidationError};
use crate::item::ItemDefinition;

/// Identifier the host assigns to a registered item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host-owned item registry.
///
/// Registration is not idempotent: submitting a name that is already present
/// is an error, never an update. Ownership of the definition moves to the
/// registry on success.
pub trait ItemRegistry {
    /// Registers a single item definition.
    ///
    /// # Errors
    ///
    /// Fails if the name is taken, the parts list is empty, or a mesh path
    /// does not resolve.
    fn register(&mut self, definition: ItemDefinition) -> Result<ItemId, RegistryError>;
}

/// Errors a registry raises when it refuses a definition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate item {0}")]
    DuplicateName(String),

    #[error("item {0} has no parts")]
    EmptyParts(String),

    #[error("item {item}: unresolvable asset path {path}")]
    UnresolvedAsset { item: String, path: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl RegistryError {
    /// Name of the offending item, when the error names one.
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateName(name) | Self::EmptyParts(name) => Some(name.as_str()),
            Self::UnresolvedAsset { item, .. } => Some(item.as_str()),
            Self::Invalid(_) => None,
        }
    }
}

impl CatalogError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Invalid(inner) => inner.severity(),
            // Any refusal by the host aborts module load
            Self::DuplicateName(_) | Self::EmptyParts(_) | Self::UnresolvedAsset { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "REGISTRY_DUPLICATE_NAME",
            Self::EmptyParts(_) => "REGISTRY_EMPTY_PARTS",
            Self::UnresolvedAsset { .. } => "REGISTRY_UNRESOLVED_ASSET",
            Self::Invalid(inner) => inner.error_code(),
        }
    }
}

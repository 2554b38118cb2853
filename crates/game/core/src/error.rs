//! Common error infrastructure for factory-core.
//!
//! Validation errors describe a malformed definition and are raised before
//! anything reaches a registry. Registry errors (see [`crate::registry`]) are
//! raised by the host when it refuses a definition.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure has its own variant carrying the item name
//! - **Severity Classification**: Errors are categorized for load handling
//! - **Stable Codes**: Every variant maps to a static error code for logs and tests

/// Severity level of an error, used for categorization and load handling.
///
/// - **Validation**: The definition itself is malformed and must be fixed at the source
/// - **Fatal**: The host cannot accept the definition and module load must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: empty parts list, negative gloss
    Validation,

    /// Module load cannot continue.
    ///
    /// Examples: duplicate item name, unresolvable mesh path
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error must abort module load.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all catalog errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether load can continue, not impact
pub trait CatalogError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors found by local validation of item definitions.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Item name is empty.
    #[error("item name is empty")]
    EmptyName,

    /// Two definitions in one catalog share a name.
    #[error("duplicate item name '{0}' in catalog")]
    DuplicateName(String),

    /// Item has no parts to render.
    #[error("item '{0}' has no parts")]
    EmptyParts(String),

    /// A part references an empty mesh path.
    #[error("item '{item}' part {part}: mesh path is empty")]
    EmptyMeshPath { item: String, part: usize },

    /// Gloss must be a finite, non-negative number.
    #[error("item '{item}' part {part}: invalid gloss {gloss}")]
    InvalidGloss { item: String, part: usize, gloss: f32 },

    /// Scale or translate contains NaN or infinity.
    #[error("item '{item}' part {part}: {field} is not finite")]
    NonFiniteVector {
        item: String,
        part: usize,
        field: &'static str,
    },

    /// armV is NaN or infinity.
    #[error("item '{0}': armV is not finite")]
    NonFiniteArmor(String),

    /// Fuel declared with no energy.
    #[error("item '{0}': fuel energy is zero")]
    ZeroFuelEnergy(String),
}

impl CatalogError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Two records with one name can never both reach the registry
            Self::DuplicateName(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ValidationError::*;
        match self {
            EmptyName => "VALIDATION_EMPTY_NAME",
            DuplicateName(_) => "VALIDATION_DUPLICATE_NAME",
            EmptyParts(_) => "VALIDATION_EMPTY_PARTS",
            EmptyMeshPath { .. } => "VALIDATION_EMPTY_MESH_PATH",
            InvalidGloss { .. } => "VALIDATION_INVALID_GLOSS",
            NonFiniteVector { .. } => "VALIDATION_NON_FINITE_VECTOR",
            NonFiniteArmor(_) => "VALIDATION_NON_FINITE_ARMOR",
            ZeroFuelEnergy(_) => "VALIDATION_ZERO_FUEL_ENERGY",
        }
    }
}

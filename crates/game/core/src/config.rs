use std::path::PathBuf;

/// Host configuration for loading content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostConfig {
    /// Validate each mod's catalog before submitting anything to the registry.
    pub validate_locally: bool,

    /// Directory mesh paths resolve against. When unset every path resolves.
    pub asset_root: Option<PathBuf>,

    /// Data-driven mods to load after the built-in base mod, in order.
    pub data_mods: Vec<String>,
}

impl HostConfig {
    pub const DEFAULT_VALIDATE_LOCALLY: bool = true;

    pub fn new() -> Self {
        Self {
            validate_locally: Self::DEFAULT_VALIDATE_LOCALLY,
            asset_root: None,
            data_mods: Vec::new(),
        }
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new()
    }
}

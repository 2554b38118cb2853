//! Mesh asset resolution.

use std::path::PathBuf;

/// Resolves mesh paths referenced by item parts.
pub trait AssetStore: Send + Sync {
    fn contains(&self, path: &str) -> bool;
}

/// Accepts every path. Used when no asset root is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyAssets;

impl AssetStore for AnyAssets {
    fn contains(&self, _path: &str) -> bool {
        true
    }
}

/// Resolves paths as files under a root directory.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirectoryAssets {
    fn contains(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_assets_check_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("models")).unwrap();
        std::fs::write(dir.path().join("models/wood.stl"), b"solid wood").unwrap();

        let assets = DirectoryAssets::new(dir.path());
        assert!(assets.contains("models/wood.stl"));
        assert!(!assets.contains("models/coal.stl"));
        assert!(!assets.contains("models"));
    }

    #[test]
    fn any_assets_accepts_everything() {
        assert!(AnyAssets.contains("models/does-not-exist.stl"));
    }
}

use std::collections::HashMap;
use std::path::PathBuf;

use portfolio_core::model::{AssetKey, ImageSource};

/// Looks up image files by conventional key.
pub trait AssetStore: Send + Sync {
    /// Path of the file for `key`, or `None` when it is absent.
    fn locate(&self, key: AssetKey) -> Option<PathBuf>;
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl AssetStore for FsAssetStore {
    fn locate(&self, key: AssetKey) -> Option<PathBuf> {
        let path = self.root.join(key.file_name());
        path.is_file().then_some(path)
    }
}

/// Fixed key-to-path table, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetStore {
    present: HashMap<AssetKey, PathBuf>,
}

impl InMemoryAssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_asset(mut self, key: AssetKey, path: impl Into<PathBuf>) -> Self {
        self.present.insert(key, path.into());
        self
    }
}

impl AssetStore for InMemoryAssetStore {
    fn locate(&self, key: AssetKey) -> Option<PathBuf> {
        self.present.get(&key).cloned()
    }
}

/// Resolve an image slot; a missing file falls back to a placeholder.
pub fn resolve_image(store: &dyn AssetStore, key: AssetKey) -> ImageSource {
    match store.locate(key) {
        Some(path) => ImageSource::asset(key, path),
        None => {
            tracing::debug!(asset = %key.file_name(), "asset missing, using placeholder");
            ImageSource::placeholder_for(key)
        }
    }
}

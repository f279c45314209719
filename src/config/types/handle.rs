//! Shared model with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic model replacement.
//! Readers keep the `Arc` they loaded, so a reload never changes a tree
//! that is being resolved against.

use super::ConfigError;
use crate::config::{self, NormalizeOptions, Normalizer};
use crate::model::NavigationModel;
use crate::utils::hash;
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to the current [`NavigationModel`].
///
/// Create one at startup and share it (`Arc<ModelHandle>` or `&ModelHandle`)
/// with whatever resolves sidebars.
///
/// # Example
///
/// ```
/// use docnav::config::ModelHandle;
/// use docnav::model::NavigationModel;
///
/// let handle = ModelHandle::new(NavigationModel::default());
/// let model = handle.load();
/// assert!(model.sidebar_for("/guide/").is_empty());
/// ```
#[derive(Debug)]
pub struct ModelHandle {
    current: ArcSwap<NavigationModel>,
    /// Config file backing the model, if any.
    source: Option<PathBuf>,
    options: NormalizeOptions,
    /// Hash of the config text the current model was built from.
    content_hash: AtomicU64,
}

impl ModelHandle {
    /// Wrap an already built model. [`reload`](Self::reload) is a no-op.
    pub fn new(model: NavigationModel) -> Self {
        Self {
            current: ArcSwap::from_pointee(model),
            source: None,
            options: NormalizeOptions::default(),
            content_hash: AtomicU64::new(0),
        }
    }

    /// Load a config file and keep its path for later reloads.
    pub fn open(path: impl Into<PathBuf>, options: NormalizeOptions) -> Result<Self, ConfigError> {
        let path = path.into();
        let (content, raw) = config::read_raw(&path)?;
        let model = Normalizer::new(options).normalize(&raw)?;

        Ok(Self {
            current: ArcSwap::from_pointee(model),
            source: Some(path),
            options,
            content_hash: AtomicU64::new(hash::compute(&content)),
        })
    }

    /// Snapshot of the current model.
    #[inline]
    pub fn load(&self) -> Arc<NavigationModel> {
        self.current.load_full()
    }

    /// Replace the model with one built elsewhere.
    pub fn store(&self, model: NavigationModel) {
        self.current.store(Arc::new(model));
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-read the config file and swap in the new model if the content changed.
    ///
    /// Returns `Ok(true)` if the model was replaced, `Ok(false)` if the file is
    /// unchanged or the handle has no backing file. On error the current model
    /// stays in place.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let Some(path) = &self.source else {
            return Ok(false);
        };

        let (content, raw) = config::read_raw(path)?;
        let new_hash = hash::compute(&content);
        if new_hash == self.content_hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let model = Normalizer::new(self.options).normalize(&raw)?;
        self.current.store(Arc::new(model));
        self.content_hash.store(new_hash, Ordering::Relaxed);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const V1: &str = "title = \"One\"\n[themeConfig.sidebar]\n\"/a/\" = [{ text = \"A\", link = \"/a/x\" }]\n";
    const V2: &str = "title = \"Two\"\n[themeConfig.sidebar]\n\"/b/\" = [{ text = \"B\", link = \"/b/x\" }]\n";

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("docnav.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_new_without_source() {
        let handle = ModelHandle::new(NavigationModel::default());
        assert!(handle.source().is_none());
        assert!(!handle.reload().unwrap());
    }

    #[test]
    fn test_reload_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, V1);
        let handle = ModelHandle::open(&path, NormalizeOptions::default()).unwrap();

        let before = handle.load();
        assert!(!handle.reload().unwrap());
        assert!(Arc::ptr_eq(&before, &handle.load()));
    }

    #[test]
    fn test_reload_swaps_model() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, V1);
        let handle = ModelHandle::open(&path, NormalizeOptions::default()).unwrap();

        // A reader holding the old snapshot keeps seeing it.
        let old = handle.load();
        write_config(&dir, V2);
        assert!(handle.reload().unwrap());

        assert_eq!(old.site().title, "One");
        assert_eq!(old.sidebar_for("/a/x")[0].text(), "A");

        let new = handle.load();
        assert_eq!(new.site().title, "Two");
        assert!(new.sidebar_for("/a/x").is_empty());
        assert_eq!(new.sidebar_for("/b/x")[0].text(), "B");
    }

    #[test]
    fn test_failed_reload_keeps_model() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, V1);
        let handle = ModelHandle::open(&path, NormalizeOptions::default()).unwrap();

        write_config(&dir, "[[themeConfig.nav]]\ntext = \"X\"\n");
        let err = handle.reload().unwrap_err();
        assert!(matches!(err, ConfigError::AmbiguousEntry { .. }));
        assert_eq!(handle.load().site().title, "One");

        // Fixing the file afterwards is picked up.
        write_config(&dir, V2);
        assert!(handle.reload().unwrap());
        assert_eq!(handle.load().site().title, "Two");
    }

    #[test]
    fn test_store_replaces_model() {
        let handle = ModelHandle::new(NavigationModel::default());
        let model = config::from_str(V2, config::ConfigFormat::Toml, NormalizeOptions::default())
            .unwrap();
        handle.store(model);
        assert_eq!(handle.load().site().title, "Two");
    }
}

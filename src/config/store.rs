//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Config container shared between the CLI entry point and the UI.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory override (CLI flags).
    pub fn update<F: FnOnce(&mut Config)>(&self, apply: F) {
        apply(&mut self.inner.write());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! The lazily-populated, read-only slug → entry directory.
//!
//! A [`CatalogDirectory`] is constructed once by the application's
//! composition root and shared by reference with every consumer. The
//! backing dataset is read and indexed on the first structurally valid
//! lookup; the outcome of that load, success or failure, is published
//! exactly once and holds for the remainder of the process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use jaunt_data::slug;

use crate::data_paths::data_path;
use crate::loader::load_directory_index;

/// File name of the guide dataset within the data root.
pub const GUIDE_FILE: &str = "guide.ron";

/// Display record resolved for one slug: a location's name and its
/// editorial introduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub name: String,
    pub intro: String,
}

/// Failure to bring the catalog dataset into memory.
///
/// Raised by the first lookup that triggers the load, and re-raised by
/// every later lookup: a directory whose dataset could not be read never
/// recovers within the process, and never masquerades as an empty catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("guide dataset at '{}' is unusable: {}", path.display(), message)]
    Unavailable { path: PathBuf, message: String },
}

/// Read-only index from slug to [`CatalogEntry`], loaded at most once.
#[derive(Debug)]
pub struct CatalogDirectory {
    source: PathBuf,
    state: OnceLock<Result<HashMap<String, CatalogEntry>, CatalogError>>,
}

impl CatalogDirectory {
    /// Create a directory backed by the deployment's guide dataset.
    ///
    /// No IO happens here; the dataset is read on first resolution.
    pub fn new() -> Self {
        Self::with_source(data_path(GUIDE_FILE))
    }

    /// Create a directory backed by an explicit dataset path.
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            state: OnceLock::new(),
        }
    }

    /// Resolve a slug to its catalog entry.
    ///
    /// Keys that are not in canonical slug form (see [`slug::is_valid`])
    /// resolve to `None` without touching the dataset. A missing key on a
    /// loaded dataset is also `None` — absence is an expected outcome, not
    /// an error.
    ///
    /// # Errors
    /// [`CatalogError::Unavailable`] when the dataset could not be read,
    /// parsed, or validated. The first resolving call surfaces the failure
    /// and every subsequent call reports the same error.
    pub fn resolve(&self, slug: &str) -> Result<Option<&CatalogEntry>, CatalogError> {
        if !slug::is_valid(slug) {
            return Ok(None);
        }
        Ok(self.entries()?.get(slug))
    }

    /// Number of entries in the catalog, forcing the load if necessary.
    ///
    /// # Errors
    /// [`CatalogError::Unavailable`] when the dataset could not be loaded.
    pub fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.entries()?.len())
    }

    /// Whether the catalog holds no entries, forcing the load if necessary.
    ///
    /// # Errors
    /// [`CatalogError::Unavailable`] when the dataset could not be loaded.
    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.entries()?.is_empty())
    }

    /// Load-and-publish: the index is built completely before any reader
    /// can observe it. Concurrent first callers block on the cell; callers
    /// after publication take no lock.
    fn entries(&self) -> Result<&HashMap<String, CatalogEntry>, CatalogError> {
        self.state
            .get_or_init(|| {
                load_directory_index(&self.source).map_err(|err| {
                    error!("failed to load guide dataset from '{}': {err:#}", self.source.display());
                    CatalogError::Unavailable {
                        path: self.source.clone(),
                        message: format!("{err:#}"),
                    }
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Default for CatalogDirectory {
    fn default() -> Self {
        Self::new()
    }
}

//! Resolution of the on-disk location of the static guide dataset.
//!
//! The dataset ships next to the crate (`jaunt_catalog/data/`) during
//! development and next to the executable in a deployment. `JAUNT_DATA_DIR`
//! overrides probing entirely.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the catalog's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Ok(dir) = env::var("JAUNT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut roots = vec![PathBuf::from(".")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        roots.push(dir.to_path_buf());
        if let Some(parent) = dir.parent() {
            roots.push(parent.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| [root.join("jaunt_catalog/data"), root.join("data")])
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("jaunt_catalog/data"))
}

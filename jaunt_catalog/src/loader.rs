//! Loader utilities for building the catalog index from the guide dataset.
//!
//! The dataset is a single RON document read whole into memory; it is
//! validated before any of it becomes visible to lookups, so a bad
//! deployment fails loudly instead of resolving to partial content.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use jaunt_data::{GuideDef, validate_guide};

use crate::directory::CatalogEntry;

/// Load a `GuideDef` from a RON file.
///
/// # Errors
/// Errors bubble up from file IO or deserialization.
pub fn load_guide(path: &Path) -> Result<GuideDef> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading guide dataset from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing guide dataset RON from '{}'", path.display()))
}

/// Convert guide defs into the runtime slug → entry index.
pub fn build_directory_index(guide: &GuideDef) -> HashMap<String, CatalogEntry> {
    let mut index = HashMap::with_capacity(guide.entries.len());
    for def in &guide.entries {
        index.insert(
            def.slug.clone(),
            CatalogEntry {
                slug: def.slug.clone(),
                name: def.name.clone(),
                intro: def.intro.clone(),
            },
        );
    }
    index
}

/// Load, validate, and index the guide dataset at `path`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or dataset validation.
pub(crate) fn load_directory_index(path: &Path) -> Result<HashMap<String, CatalogEntry>> {
    let guide = load_guide(path)?;
    validate_dataset(&guide)?;
    let index = build_directory_index(&guide);
    info!("{} catalog entries indexed from '{}'", index.len(), path.display());
    Ok(index)
}

/// Validate the guide dataset and return a single aggregated error.
fn validate_dataset(guide: &GuideDef) -> Result<()> {
    let errors = validate_guide(guide);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("guide dataset validation failed:\n{details}");
}

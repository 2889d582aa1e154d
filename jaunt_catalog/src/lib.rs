#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const JAUNT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod data_paths;
pub mod directory;
pub mod loader;

// Re-exports for convenience
pub use directory::{CatalogDirectory, CatalogEntry, CatalogError};
pub use loader::load_guide;

//! Shared data model for Jaunt editorial content.

pub mod defs;
pub mod slug;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_guide};

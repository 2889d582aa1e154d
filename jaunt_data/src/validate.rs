use std::collections::HashSet;
use std::fmt;

use crate::defs::GuideDef;
use crate::slug;

/// Validation error for a malformed or inconsistent guide dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateSlug { slug: String },
    MalformedSlug { slug: String },
    MissingField { slug: String, field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSlug { slug } => {
                write!(f, "duplicate entry slug '{slug}'")
            },
            ValidationError::MalformedSlug { slug } => {
                write!(f, "entry slug '{slug}' is not in canonical form")
            },
            ValidationError::MissingField { slug, field } => {
                write!(f, "entry '{slug}' is missing required field '{field}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate slug keys and basic invariants in a guide dataset.
///
/// ```
/// use jaunt_data::{CatalogEntryDef, GuideDef, validate_guide};
///
/// let guide = GuideDef {
///     entries: vec![CatalogEntryDef {
///         slug: "paris".into(),
///         name: "Paris".into(),
///         intro: "The city of light.".into(),
///     }],
/// };
/// assert!(validate_guide(&guide).is_empty());
/// ```
pub fn validate_guide(guide: &GuideDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for entry in &guide.entries {
        if !slug::is_valid(&entry.slug) {
            errors.push(ValidationError::MalformedSlug {
                slug: entry.slug.clone(),
            });
        }
        if !seen.insert(entry.slug.as_str()) {
            errors.push(ValidationError::DuplicateSlug {
                slug: entry.slug.clone(),
            });
        }
        if entry.name.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                slug: entry.slug.clone(),
                field: "name",
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::CatalogEntryDef;

    fn entry(slug: &str, name: &str) -> CatalogEntryDef {
        CatalogEntryDef {
            slug: slug.into(),
            name: name.into(),
            intro: String::new(),
        }
    }

    #[test]
    fn clean_guide_passes() {
        let guide = GuideDef {
            entries: vec![entry("paris", "Paris"), entry("old-town-square", "Old Town Square")],
        };
        assert!(validate_guide(&guide).is_empty());
    }

    #[test]
    fn duplicate_slugs_are_reported() {
        let guide = GuideDef {
            entries: vec![entry("paris", "Paris"), entry("paris", "Paris, again")],
        };
        assert_eq!(
            validate_guide(&guide),
            vec![ValidationError::DuplicateSlug { slug: "paris".into() }]
        );
    }

    #[test]
    fn malformed_slugs_are_reported() {
        let guide = GuideDef {
            entries: vec![entry("Old_Town", "Old Town")],
        };
        assert_eq!(
            validate_guide(&guide),
            vec![ValidationError::MalformedSlug { slug: "Old_Town".into() }]
        );
    }

    #[test]
    fn blank_names_are_reported() {
        let guide = GuideDef {
            entries: vec![entry("kyoto", "  ")],
        };
        assert_eq!(
            validate_guide(&guide),
            vec![ValidationError::MissingField {
                slug: "kyoto".into(),
                field: "name",
            }]
        );
    }
}

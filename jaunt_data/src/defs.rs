use serde::{Deserialize, Serialize};

/// Canonical identifier used across guide references.
///
/// See [`crate::slug`] for the derivation and format rules.
pub type Slug = String;

/// Top-level guide dataset loaded by the catalog at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuideDef {
    #[serde(default)]
    pub entries: Vec<CatalogEntryDef>,
}

/// One location's editorial introduction, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryDef {
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub intro: String,
}

/// A city page composed from catalog entries and points of interest.
///
/// Shape only; no behavior attaches to it in this crate. The rendering
/// layer composes these from resolved catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDef {
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub pois: Vec<Slug>,
}

/// A point of interest belonging to a city. Shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiDef {
    pub slug: Slug,
    pub name: String,
    pub city: Slug,
    #[serde(default)]
    pub summary: String,
}

/// An ordered day itinerary referencing points of interest. Shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanDef {
    pub slug: Slug,
    pub title: String,
    pub city: Slug,
    #[serde(default)]
    pub stops: Vec<Slug>,
}

/// An optional detour attached to a day plan. Shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidequestItemDef {
    pub title: String,
    pub poi: Slug,
    #[serde(default)]
    pub note: String,
}

/// Reader display preferences carried alongside rendered pages. Shape only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default = "default_text_scale")]
    pub text_scale: f32,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            high_contrast: false,
            text_scale: default_text_scale(),
        }
    }
}

fn default_text_scale() -> f32 {
    1.0
}

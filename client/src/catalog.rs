//! Project records and the built-in catalog.
//!
//! The catalog is a JSON document compiled into the crate so SSR output and
//! the hydrated bundle always agree on the same list. Host pages can pass
//! their own list to `ProjectShowcase` instead.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../projects.json");

/// One showcased project. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    /// Long-form markdown shown in the detail modal.
    #[serde(default)]
    pub details: Option<String>,
}

impl Project {
    /// Images for the detail modal: the gallery, or the card image alone.
    pub fn modal_images(&self) -> Vec<&str> {
        match &self.gallery {
            Some(images) if !images.is_empty() => images.iter().map(String::as_str).collect(),
            _ => vec![self.image.as_str()],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("project catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog document: a JSON array of projects.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the document is not a valid project array.
pub fn parse_catalog(json: &str) -> Result<Vec<Project>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// The catalog shipped with the site. A broken document degrades to an
/// empty gallery rather than a failed render.
pub fn builtin_projects() -> Vec<Project> {
    match parse_catalog(BUILTIN_CATALOG) {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}

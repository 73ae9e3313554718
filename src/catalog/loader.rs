//! Catalog loader - reads the card data file from the source directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{builtin, Catalog, Category};
use crate::Site;

/// Data file names tried in order, relative to `source/_data`
const DATA_FILES: &[&str] = &["cards.yml", "cards.yaml", "cards.json"];

/// Loads the topic catalog for a site
pub struct CatalogLoader<'a> {
    site: &'a Site,
}

impl<'a> CatalogLoader<'a> {
    /// Create a new catalog loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Directory holding site data files
    pub fn data_dir(&self) -> PathBuf {
        self.site.source_dir.join("_data")
    }

    /// First existing data file, if any
    pub fn data_file(&self) -> Option<PathBuf> {
        let dir = self.data_dir();
        DATA_FILES.iter().map(|f| dir.join(f)).find(|p| p.is_file())
    }

    /// Load the catalog from the data file, or fall back to the built-in table
    pub fn load(&self) -> Result<Catalog> {
        match self.data_file() {
            Some(path) => load_file(&path),
            None => {
                tracing::debug!(
                    "No card data in {:?}, using built-in catalog",
                    self.data_dir()
                );
                Ok(builtin().clone())
            }
        }
    }
}

/// Parse and validate a card data file
pub fn load_file(path: &Path) -> Result<Catalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

    let categories: Vec<Category> = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?
    };

    let catalog =
        Catalog::new(categories).with_context(|| format!("Invalid card data in {:?}", path))?;
    tracing::debug!("Loaded {} categories from {:?}", catalog.len(), path);

    Ok(catalog)
}

//! Catalog loading.
//!
//! The catalog JSON document comes from either a local file or an HTTP URL.
//! Load or parse failures are logged and degrade to an empty catalog so the
//! UI can still start.

use super::model::Catalog;
use crate::error::{Result, ToolshelfError};
use std::fs;
use std::path::Path;

/// Where the catalog document comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Local JSON file
    File(std::path::PathBuf),
    /// HTTP(S) URL returning the catalog JSON
    Url(String),
}

impl CatalogSource {
    /// Load the catalog, propagating errors.
    pub async fn load(&self) -> Result<Catalog> {
        match self {
            Self::File(path) => load_from_file(path),
            Self::Url(url) => fetch_from_url(url).await,
        }
    }

    /// Load the catalog, degrading to an empty one on failure.
    ///
    /// This is the startup path: a broken catalog source must not prevent
    /// the UI from opening.
    pub async fn load_or_empty(&self) -> Catalog {
        match self.load().await {
            Ok(catalog) => {
                log::info!("Loaded catalog with {} tools", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                Catalog::default()
            }
        }
    }
}

/// Read and parse the catalog from a local file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ToolshelfError::Catalog(format!("{}: {}", path.display(), e)))?;
    let catalog: Catalog = serde_json::from_str(&content)
        .map_err(|e| ToolshelfError::Catalog(format!("{}: {}", path.display(), e)))?;
    Ok(catalog)
}

/// Fetch and parse the catalog from a URL.
pub async fn fetch_from_url(url: &str) -> Result<Catalog> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let catalog: Catalog = response.json().await?;
    Ok(catalog)
}

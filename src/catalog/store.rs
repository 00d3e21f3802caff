//! Catalog store: single source of truth.
//!
//! Holds the full list of tool records plus the user's favorite set. The
//! filter engine derives views from it; the store itself only mutates the
//! favorite set.

use super::model::{Catalog, Tool};
use crate::error::{Result, ToolshelfError};
use std::collections::BTreeSet;

/// The catalog plus the user-curated favorite set.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    favorites: BTreeSet<String>,
}

impl CatalogStore {
    /// Create a store from a loaded catalog and persisted favorites.
    pub fn new(catalog: Catalog, favorites: BTreeSet<String>) -> Self {
        Self { catalog, favorites }
    }

    /// All tool records, in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.catalog.tools
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.catalog.tools.iter().find(|t| t.id == id)
    }

    /// Look up a tool by id, erroring when absent.
    pub fn require(&self, id: &str) -> Result<&Tool> {
        self.get(id).ok_or_else(|| ToolshelfError::ToolNotFound(id.to_string()))
    }

    /// The current favorite set.
    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    /// Whether a tool id is favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle a tool in the favorite set. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    /// Add a tool id to favorites. Errors when the id is unknown.
    pub fn add_favorite(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.favorites.insert(id.to_string());
        Ok(())
    }

    /// Remove a tool id from favorites.
    pub fn remove_favorite(&mut self, id: &str) {
        self.favorites.remove(id);
    }
}
